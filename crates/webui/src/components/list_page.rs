//! Wiring shared by the three list pages: the reducer, the mount fetch, and
//! the callbacks behind the Add/Edit/Delete/Save/Cancel buttons.

use crate::{
    client::{GlooTransport, Resource, ResourceClient},
    model::RecordId,
    view::{
        Editable, Field, ListAction, ListModel,
        flow::{self, BrowserDialogs},
    },
};
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

pub struct ListPage<R: Editable> {
    pub model: UseReducerHandle<ListModel<R>>,
    pub on_add: Callback<MouseEvent>,
    pub on_edit: Callback<R::Entity>,
    pub on_delete: Callback<RecordId>,
    pub on_cancel: Callback<()>,
    pub on_save: Callback<()>,
    on_field: Callback<(Field<R>, String)>,
}

impl<R: Editable> ListPage<R> {
    /// Input handler writing into one field of the open draft.
    pub fn field(&self, field: Field<R>) -> Callback<String> {
        let on_field = self.on_field.clone();
        Callback::from(move |value| on_field.emit((field, value)))
    }

    /// Edit button handler for one row.
    pub fn edit(&self, row: &R::Entity) -> Callback<MouseEvent> {
        let on_edit = self.on_edit.clone();
        let row = row.clone();
        Callback::from(move |_| on_edit.emit(row.clone()))
    }

    /// Delete button handler; rows without identity cannot be deleted.
    pub fn delete(&self, row: &R::Entity) -> Option<Callback<MouseEvent>> {
        let id = R::id(row)?;
        let on_delete = self.on_delete.clone();
        Some(Callback::from(move |_| on_delete.emit(id)))
    }
}

#[hook]
pub fn use_list_page<R: Editable>() -> ListPage<R> {
    let model = use_reducer(ListModel::<R>::default);

    // Effect: fetch the collection once on mount
    {
        let dispatcher = model.dispatcher();
        use_effect_with((), move |()| {
            spawn_local(async move {
                let client = ResourceClient::<R, GlooTransport>::from_config();
                flow::load(&client, &BrowserDialogs, &|action| {
                    dispatcher.dispatch(action);
                })
                .await;
            });
        });
    }

    let on_add = {
        let dispatcher = model.dispatcher();
        Callback::from(move |_: MouseEvent| dispatcher.dispatch(ListAction::OpenAdd))
    };

    let on_edit = {
        let dispatcher = model.dispatcher();
        Callback::from(move |row: R::Entity| dispatcher.dispatch(ListAction::OpenEdit(row)))
    };

    let on_field = {
        let dispatcher = model.dispatcher();
        Callback::from(move |(field, value): (Field<R>, String)| {
            dispatcher.dispatch(ListAction::UpdateField(field, value));
        })
    };

    let on_cancel = {
        let dispatcher = model.dispatcher();
        Callback::from(move |()| dispatcher.dispatch(ListAction::Cancel))
    };

    // Clicked on "Save"
    let on_save = {
        let model = model.clone();
        Callback::from(move |()| {
            let Some(submission) = model.submission() else {
                return;
            };
            let dispatcher = model.dispatcher();
            spawn_local(async move {
                let client = ResourceClient::<R, GlooTransport>::from_config();
                flow::save(&client, &BrowserDialogs, submission, &|action| {
                    dispatcher.dispatch(action);
                })
                .await;
            });
        })
    };

    // Clicked on "Delete"
    let on_delete = {
        let dispatcher = model.dispatcher();
        Callback::from(move |id: RecordId| {
            let dispatcher = dispatcher.clone();
            spawn_local(async move {
                let client = ResourceClient::<R, GlooTransport>::from_config();
                flow::delete(&client, &BrowserDialogs, id, &|action| {
                    dispatcher.dispatch(action);
                })
                .await;
            });
        })
    };

    ListPage {
        model,
        on_add,
        on_edit,
        on_delete,
        on_cancel,
        on_save,
        on_field,
    }
}

pub fn page_header(
    title: &'static str,
    add_label: &'static str,
    on_add: &Callback<MouseEvent>,
) -> Html {
    html! {
        <div class="header">
            <h2>{ title }</h2>
            <button class="btn btn-primary" onclick={on_add.clone()}>{ add_label }</button>
        </div>
    }
}

pub fn loading_card() -> Html {
    html! { <div class="card"><p>{"Loading..."}</p></div> }
}

pub fn empty_card<R: Resource>() -> Html {
    html! {
        <div class="card">
            <p>{ format!("No {} found. Add your first {}!", R::PLURAL, R::SINGULAR) }</p>
        </div>
    }
}

pub fn row_actions(
    on_edit: Callback<MouseEvent>,
    on_delete: Option<Callback<MouseEvent>>,
) -> Html {
    let can_delete = on_delete.is_some();
    html! {
        <td class="actions">
            <button class="btn btn-secondary" onclick={on_edit}>{"Edit"}</button>
            <button class="btn btn-danger" onclick={on_delete} disabled={!can_delete}>{"Delete"}</button>
        </td>
    }
}

/// Key for a table row: its identity, or its position if it has none.
pub fn row_key(id: Option<RecordId>, idx: usize) -> String {
    id.map_or_else(|| format!("row-{idx}"), |id| id.to_string())
}

pub fn id_cell(id: Option<RecordId>) -> Html {
    html! { <td class="number">{ id.map(|id| id.to_string()).unwrap_or_default() }</td> }
}
