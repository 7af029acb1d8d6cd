//! Per-view state machines, independent of rendering.
//!
//! A list view moves `Idle -> Loading -> Loaded` and opens a modal on top of
//! the loaded rows for adding or editing. The modal edits a [`Draft`] built
//! from a copy of the row, so the table never shows unsaved edits.

pub mod draft;
pub mod flow;

use crate::client::{DepartmentResource, EnrollmentResource, Resource, StudentResource};
use derive_where::derive_where;
use draft::{DepartmentDraft, Draft, DraftError, EnrollmentDraft, StudentDraft};
use log::debug;
use std::rc::Rc;
use yew::Reducible;

/// A resource that has a list view with an add/edit form.
pub trait Editable: Resource {
    type Draft: Draft<Entity = Self::Entity>;
}

impl Editable for StudentResource {
    type Draft = StudentDraft;
}

impl Editable for DepartmentResource {
    type Draft = DepartmentDraft;
}

impl Editable for EnrollmentResource {
    type Draft = EnrollmentDraft;
}

pub type Field<R> = <<R as Editable>::Draft as Draft>::Field;
pub type Lookup<R> = <<R as Editable>::Draft as Draft>::Lookup;

#[derive(Clone, Debug, PartialEq)]
pub enum Mode<E> {
    Adding,
    /// Holds the row as it was when the modal opened.
    Editing(E),
}

#[derive_where(Clone, Debug, PartialEq)]
pub enum Phase<R: Editable> {
    Idle,
    Loading,
    Loaded,
    ModalOpen { mode: Mode<R::Entity>, draft: R::Draft },
}

#[derive_where(Debug)]
pub enum ListAction<R: Editable> {
    LoadStarted,
    Loaded(Vec<R::Entity>),
    /// Rows stay as they were.
    LoadFailed,
    LookupLoaded(Lookup<R>),
    OpenAdd,
    OpenEdit(R::Entity),
    UpdateField(Field<R>, String),
    Cancel,
    /// The modal's entity was stored; a reload follows.
    Saved,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Operation {
    Create,
    Update,
}

impl Operation {
    /// Used in alerts: "Error creating student".
    pub fn progressive(self) -> &'static str {
        match self {
            Operation::Create => "creating",
            Operation::Update => "updating",
        }
    }
}

/// The outcome of pressing "Save" on the open modal.
#[derive(Clone, Debug, PartialEq)]
pub struct Submission<E> {
    pub operation: Operation,
    pub entity: Result<E, DraftError>,
}

/// What the page body shows below its header.
#[derive(Debug, PartialEq)]
pub enum Body<'a, E> {
    Loading,
    Empty,
    Table(&'a [E]),
}

#[derive_where(Clone, Debug, PartialEq)]
pub struct ListModel<R: Editable> {
    pub rows: Vec<R::Entity>,
    pub lookup: Lookup<R>,
    pub phase: Phase<R>,
}

impl<R: Editable> Default for ListModel<R> {
    fn default() -> Self {
        Self {
            rows: Vec::new(),
            lookup: Default::default(),
            phase: Phase::Idle,
        }
    }
}

impl<R: Editable> ListModel<R> {
    pub fn apply(&mut self, action: ListAction<R>) {
        debug!("{}: {action:?}", R::PLURAL);
        match action {
            ListAction::LoadStarted => {
                if !self.is_modal_open() {
                    self.phase = Phase::Loading;
                }
            }
            ListAction::Loaded(rows) => {
                self.rows = rows;
                self.settle();
            }
            ListAction::LoadFailed => self.settle(),
            ListAction::LookupLoaded(lookup) => self.lookup = lookup,
            ListAction::OpenAdd => {
                self.phase = Phase::ModalOpen {
                    mode: Mode::Adding,
                    draft: R::Draft::blank(),
                };
            }
            ListAction::OpenEdit(row) => {
                self.phase = Phase::ModalOpen {
                    draft: R::Draft::from_entity(&row),
                    mode: Mode::Editing(row),
                };
            }
            ListAction::UpdateField(field, value) => {
                if let Phase::ModalOpen { draft, .. } = &mut self.phase {
                    draft.set(field, value);
                }
            }
            ListAction::Cancel | ListAction::Saved => self.phase = Phase::Loaded,
        }
    }

    /// A response arrived; an open modal is left alone.
    fn settle(&mut self) {
        if !self.is_modal_open() {
            self.phase = Phase::Loaded;
        }
    }

    pub fn is_modal_open(&self) -> bool {
        matches!(self.phase, Phase::ModalOpen { .. })
    }

    pub fn draft(&self) -> Option<&R::Draft> {
        match &self.phase {
            Phase::ModalOpen { draft, .. } => Some(draft),
            _ => None,
        }
    }

    pub fn is_editing(&self) -> bool {
        matches!(
            self.phase,
            Phase::ModalOpen {
                mode: Mode::Editing(_),
                ..
            }
        )
    }

    /// Validates the open draft. `None` when no modal is open.
    pub fn submission(&self) -> Option<Submission<R::Entity>> {
        let Phase::ModalOpen { mode, draft } = &self.phase else {
            return None;
        };
        let operation = match mode {
            Mode::Adding => Operation::Create,
            Mode::Editing(_) => Operation::Update,
        };
        Some(Submission {
            operation,
            entity: draft.submit(&self.lookup),
        })
    }

    pub fn body(&self) -> Body<'_, R::Entity> {
        match self.phase {
            Phase::Idle | Phase::Loading => Body::Loading,
            _ if self.rows.is_empty() => Body::Empty,
            _ => Body::Table(&self.rows),
        }
    }
}

impl<R: Editable> Reducible for ListModel<R> {
    type Action = ListAction<R>;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut next = (*self).clone();
        next.apply(action);
        Rc::new(next)
    }
}
