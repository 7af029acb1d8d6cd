//! Async steps connecting a list view to its client.
//!
//! Each step reports state changes through `dispatch` and failures through
//! [`Dialogs`]; nothing here retries or cancels.

use super::{Editable, ListAction, Operation, Submission};
use crate::{
    client::{Resource, ResourceClient, Transport},
    model::RecordId,
};
use log::{debug, error, warn};

/// Blocking browser dialogs.
pub trait Dialogs {
    fn alert(&self, message: &str);
    fn confirm(&self, message: &str) -> bool;
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct BrowserDialogs;

impl Dialogs for BrowserDialogs {
    fn alert(&self, message: &str) {
        gloo::dialogs::alert(message);
    }

    fn confirm(&self, message: &str) -> bool {
        gloo::dialogs::confirm(message)
    }
}

/// Full collection fetch. On failure the rows stay as they were.
pub async fn load<R, T>(
    client: &ResourceClient<R, T>,
    dialogs: &impl Dialogs,
    dispatch: &impl Fn(ListAction<R>),
) where
    R: Editable,
    T: Transport,
{
    dispatch(ListAction::LoadStarted);
    match client.list().await {
        Ok(rows) => {
            debug!("Loaded {} {}", rows.len(), R::PLURAL);
            dispatch(ListAction::Loaded(rows));
        }
        Err(err) => {
            error!("Error loading {}: {err}", R::PLURAL);
            dispatch(ListAction::LoadFailed);
            dialogs.alert(&format!(
                "Error loading {}. Please check if the backend is running.",
                R::PLURAL
            ));
        }
    }
}

/// Reference rows for a form picker. Failures are only logged.
pub async fn load_lookup<L, T>(client: &ResourceClient<L, T>) -> Option<Vec<L::Entity>>
where
    L: Resource,
    T: Transport,
{
    match client.list().await {
        Ok(rows) => Some(rows),
        Err(err) => {
            error!("Error loading {}: {err}", L::PLURAL);
            None
        }
    }
}

/// Creates or updates the modal's entity, then reloads the whole list.
/// On failure the modal stays open. Returns whether the entity was stored.
pub async fn save<R, T>(
    client: &ResourceClient<R, T>,
    dialogs: &impl Dialogs,
    submission: Submission<R::Entity>,
    dispatch: &impl Fn(ListAction<R>),
) -> bool
where
    R: Editable,
    T: Transport,
{
    let Submission { operation, entity } = submission;
    let failure = format!("Error {} {}", operation.progressive(), R::SINGULAR);
    let entity = match entity {
        Ok(entity) => entity,
        Err(err) => {
            warn!("{failure}: {err}");
            dialogs.alert(&format!("{failure}: {err}"));
            return false;
        }
    };

    let result = match operation {
        Operation::Create => client.create(&entity).await,
        Operation::Update => client.update(&entity).await,
    };
    match result {
        Ok(stored) => {
            debug!("Stored {} {:?}", R::SINGULAR, R::id(&stored));
            dispatch(ListAction::Saved);
            load(client, dialogs, dispatch).await;
            true
        }
        Err(err) => {
            error!("{failure}: {err}");
            dialogs.alert(&failure);
            false
        }
    }
}

/// Deletes after an explicit confirmation, then reloads the whole list.
/// Returns whether a delete request succeeded.
pub async fn delete<R, T>(
    client: &ResourceClient<R, T>,
    dialogs: &impl Dialogs,
    id: RecordId,
    dispatch: &impl Fn(ListAction<R>),
) -> bool
where
    R: Editable,
    T: Transport,
{
    if !dialogs.confirm(&format!(
        "Are you sure you want to delete this {}?",
        R::SINGULAR
    )) {
        debug!("Delete of {} {id} declined", R::SINGULAR);
        return false;
    }
    match client.delete(id).await {
        Ok(()) => {
            load(client, dialogs, dispatch).await;
            true
        }
        Err(err) => {
            error!("Error deleting {} {id}: {err}", R::SINGULAR);
            dialogs.alert(&format!("Error deleting {}", R::SINGULAR));
            false
        }
    }
}
