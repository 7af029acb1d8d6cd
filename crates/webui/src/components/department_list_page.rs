use crate::{
    client::DepartmentResource,
    components::{
        list_page::{
            empty_card, id_cell, loading_card, page_header, row_actions, row_key, use_list_page,
        },
        modal::{Modal, TextField},
    },
    view::{Body, draft::DepartmentField},
};
use yew::prelude::*;

#[function_component(DepartmentListPage)]
pub fn department_list_page() -> Html {
    let page = use_list_page::<DepartmentResource>();

    let body = match page.model.body() {
        Body::Loading => loading_card(),
        Body::Empty => empty_card::<DepartmentResource>(),
        Body::Table(departments) => {
            let rows = departments
                .iter()
                .enumerate()
                .map(|(idx, department)| {
                    html! {
                        <tr key={row_key(department.id_department, idx)}>
                            { id_cell(department.id_department) }
                            <td>{ &department.name }</td>
                            <td>{ &department.location }</td>
                            <td>{ &department.phone }</td>
                            <td>{ &department.head }</td>
                            { row_actions(page.edit(department), page.delete(department)) }
                        </tr>
                    }
                })
                .collect::<Html>();

            html! {
                <table class="department_list">
                    <thead>
                        <tr>
                            <th class="number">{"ID"}</th>
                            <th>{"Name"}</th>
                            <th>{"Location"}</th>
                            <th>{"Phone"}</th>
                            <th>{"Head"}</th>
                            <th>{"Actions"}</th>
                        </tr>
                    </thead>
                    <tbody>
                        { rows }
                    </tbody>
                </table>
            }
        }
    };

    let modal = page.model.draft().map(|draft| {
        let title = if page.model.is_editing() {
            "Edit Department"
        } else {
            "Add Department"
        };
        let department = &draft.department;
        html! {
            <Modal {title} on_close={page.on_cancel.clone()} on_submit={page.on_save.clone()}>
                <TextField label="Name" name="name" required=true
                    value={department.name.clone()} oninput={page.field(DepartmentField::Name)} />
                <TextField label="Location" name="location" required=true
                    value={department.location.clone()} oninput={page.field(DepartmentField::Location)} />
                <TextField label="Phone" name="phone" required=true
                    value={department.phone.clone()} oninput={page.field(DepartmentField::Phone)} />
                <TextField label="Head" name="head" required=true
                    value={department.head.clone()} oninput={page.field(DepartmentField::Head)} />
            </Modal>
        }
    });

    html! {
        <div class="container">
            { page_header("Departments", "Add Department", &page.on_add) }
            { body }
            { modal }
        </div>
    }
}
