use crate::{
    client::{DepartmentClient, StudentResource},
    components::{
        list_page::{
            empty_card, id_cell, loading_card, page_header, row_actions, row_key, use_list_page,
        },
        modal::{Modal, SelectField, SelectOption, TextField},
    },
    model::Department,
    util::date::display_date,
    view::{Body, ListAction, draft::StudentField, flow},
};
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

fn department_options(
    departments: &[Department],
    current: Option<&Department>,
) -> Vec<SelectOption> {
    let mut options = vec![SelectOption::new("", "None")];
    options.extend(departments.iter().filter_map(|department| {
        let id = department.id_department?;
        Some(SelectOption::new(id.to_string(), department.name.clone()))
    }));
    // The row's own department, if the picker list has not arrived yet.
    if let Some(current) = current
        && let Some(id) = current.id_department
        && !departments.iter().any(|d| d.id_department == Some(id))
    {
        options.push(SelectOption::new(id.to_string(), current.name.clone()));
    }
    options
}

#[function_component(StudentListPage)]
pub fn student_list_page() -> Html {
    let page = use_list_page::<StudentResource>();

    // Effect: departments for the picker
    {
        let dispatcher = page.model.dispatcher();
        use_effect_with((), move |()| {
            spawn_local(async move {
                if let Some(departments) =
                    flow::load_lookup(&DepartmentClient::from_config()).await
                {
                    dispatcher.dispatch(ListAction::LookupLoaded(departments));
                }
            });
        });
    }

    let body = match page.model.body() {
        Body::Loading => loading_card(),
        Body::Empty => empty_card::<StudentResource>(),
        Body::Table(students) => {
            let rows = students
                .iter()
                .enumerate()
                .map(|(idx, student)| {
                    html! {
                        <tr key={row_key(student.id_student, idx)}>
                            { id_cell(student.id_student) }
                            <td>{ &student.first_name }</td>
                            <td>{ &student.last_name }</td>
                            <td>{ &student.email }</td>
                            <td>{ &student.phone }</td>
                            <td>{ display_date(&student.date_of_birth) }</td>
                            <td>{ &student.address }</td>
                            <td>{ student.department.as_ref().map_or("N/A", |d| d.name.as_str()) }</td>
                            { row_actions(page.edit(student), page.delete(student)) }
                        </tr>
                    }
                })
                .collect::<Html>();

            html! {
                <table class="student_list">
                    <thead>
                        <tr>
                            <th class="number">{"ID"}</th>
                            <th>{"First Name"}</th>
                            <th>{"Last Name"}</th>
                            <th>{"Email"}</th>
                            <th>{"Phone"}</th>
                            <th>{"Date of Birth"}</th>
                            <th>{"Address"}</th>
                            <th>{"Department"}</th>
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
            "Edit Student"
        } else {
            "Add Student"
        };
        let student = &draft.student;
        let options = department_options(&page.model.lookup, student.department.as_ref());
        html! {
            <Modal {title} on_close={page.on_cancel.clone()} on_submit={page.on_save.clone()}>
                <TextField label="First Name" name="firstName" required=true
                    value={student.first_name.clone()} oninput={page.field(StudentField::FirstName)} />
                <TextField label="Last Name" name="lastName" required=true
                    value={student.last_name.clone()} oninput={page.field(StudentField::LastName)} />
                <TextField label="Email" name="email" input_type="email" required=true
                    value={student.email.clone()} oninput={page.field(StudentField::Email)} />
                <TextField label="Phone" name="phone" required=true
                    value={student.phone.clone()} oninput={page.field(StudentField::Phone)} />
                <TextField label="Date of Birth" name="dateOfBirth" input_type="date" required=true
                    value={student.date_of_birth.clone()} oninput={page.field(StudentField::DateOfBirth)} />
                <TextField label="Address" name="address"
                    value={student.address.clone()} oninput={page.field(StudentField::Address)} />
                <SelectField label="Department" name="department"
                    value={draft.department_id.clone()} {options}
                    onchange={page.field(StudentField::Department)} />
            </Modal>
        }
    });

    html! {
        <div class="container">
            { page_header("Students", "Add Student", &page.on_add) }
            { body }
            { modal }
        </div>
    }
}
