use crate::{
    client::{EnrollmentResource, StudentClient},
    components::{
        list_page::{
            empty_card, id_cell, loading_card, page_header, row_actions, row_key, use_list_page,
        },
        modal::{Modal, SelectField, SelectOption, TextField},
    },
    model::{Enrollment, Status},
    util::date::display_date,
    view::{Body, ListAction, draft::EnrollmentField, flow},
};
use strum::IntoEnumIterator as _;
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

fn grade_text(enrollment: &Enrollment) -> String {
    enrollment
        .grade
        .map_or_else(|| "N/A".to_string(), |grade| grade.to_string())
}

fn student_text(enrollment: &Enrollment) -> String {
    enrollment
        .student
        .as_ref()
        .map(|student| student.full_name())
        .filter(|name| !name.is_empty())
        .unwrap_or_else(|| "N/A".to_string())
}

fn status_text(enrollment: &Enrollment) -> String {
    enrollment
        .status
        .map_or_else(|| "N/A".to_string(), |status| status.to_string())
}

/// Every status in declaration order. A draft without a valid status gets an
/// empty first entry so the picker does not pretend one is chosen.
fn status_options(current: &str) -> Vec<SelectOption> {
    let mut options = Vec::new();
    if current.parse::<Status>().is_err() {
        options.push(SelectOption::new("", "Select status"));
    }
    options.extend(
        Status::iter().map(|status| SelectOption::new(status.to_string(), status.to_string())),
    );
    options
}

#[function_component(EnrollmentListPage)]
pub fn enrollment_list_page() -> Html {
    let page = use_list_page::<EnrollmentResource>();

    // Effect: students, to resolve the Student ID input on save
    {
        let dispatcher = page.model.dispatcher();
        use_effect_with((), move |()| {
            spawn_local(async move {
                if let Some(students) = flow::load_lookup(&StudentClient::from_config()).await {
                    dispatcher.dispatch(ListAction::LookupLoaded(students));
                }
            });
        });
    }

    let body = match page.model.body() {
        Body::Loading => loading_card(),
        Body::Empty => empty_card::<EnrollmentResource>(),
        Body::Table(enrollments) => {
            let rows = enrollments
                .iter()
                .enumerate()
                .map(|(idx, enrollment)| {
                    html! {
                        <tr key={row_key(enrollment.id_enrollment, idx)}>
                            { id_cell(enrollment.id_enrollment) }
                            <td>{ display_date(&enrollment.enrollment_date) }</td>
                            <td class="number">{ grade_text(enrollment) }</td>
                            <td>{ status_text(enrollment) }</td>
                            <td>{ student_text(enrollment) }</td>
                            <td>{ enrollment.course.as_ref().map_or("N/A", |c| c.name.as_str()) }</td>
                            { row_actions(page.edit(enrollment), page.delete(enrollment)) }
                        </tr>
                    }
                })
                .collect::<Html>();

            html! {
                <table class="enrollment_list">
                    <thead>
                        <tr>
                            <th class="number">{"ID"}</th>
                            <th>{"Enrollment Date"}</th>
                            <th class="number">{"Grade"}</th>
                            <th>{"Status"}</th>
                            <th>{"Student"}</th>
                            <th>{"Course"}</th>
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
            "Edit Enrollment"
        } else {
            "Add Enrollment"
        };
        html! {
            <Modal {title} on_close={page.on_cancel.clone()} on_submit={page.on_save.clone()}>
                <TextField label="Enrollment Date" name="enrollmentDate" input_type="date" required=true
                    value={draft.enrollment.enrollment_date.clone()}
                    oninput={page.field(EnrollmentField::EnrollmentDate)} />
                <TextField label="Grade" name="grade" input_type="number" step="0.01"
                    value={draft.grade.clone()} oninput={page.field(EnrollmentField::Grade)} />
                <SelectField label="Status" name="status" required=true
                    value={draft.status.clone()} options={status_options(&draft.status)}
                    onchange={page.field(EnrollmentField::Status)} />
                <TextField label="Student ID" name="studentId" input_type="number"
                    placeholder="Enter student ID"
                    value={draft.student_id.clone()} oninput={page.field(EnrollmentField::StudentId)} />
                <TextField label="Course ID" name="courseId" input_type="number"
                    placeholder="Enter course ID"
                    value={draft.course_id.clone()} oninput={page.field(EnrollmentField::CourseId)} />
            </Modal>
        }
    });

    html! {
        <div class="container">
            { page_header("Enrollments", "Add Enrollment", &page.on_add) }
            { body }
            { modal }
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Student;

    #[test]
    fn missing_grade_and_student_render_as_na() {
        let enrollment = Enrollment::default();
        assert_eq!(grade_text(&enrollment), "N/A");
        assert_eq!(student_text(&enrollment), "N/A");
    }

    #[test]
    fn grade_and_student_are_rendered() {
        let enrollment = Enrollment {
            grade: Some(3.5),
            student: Some(Student {
                first_name: "Grace".to_string(),
                last_name: "Hopper".to_string(),
                ..Default::default()
            }),
            ..Default::default()
        };
        assert_eq!(grade_text(&enrollment), "3.5");
        assert_eq!(student_text(&enrollment), "Grace Hopper");
    }

    fn option_values(current: &str) -> Vec<String> {
        status_options(current)
            .into_iter()
            .map(|option| option.value.to_string())
            .collect()
    }

    #[test]
    fn status_picker_lists_every_status() {
        assert_eq!(
            option_values("ACTIVE"),
            ["ACTIVE", "COMPLETED", "DROPPED", "FAILED", "WITHDRAWN"]
        );
    }

    #[test]
    fn status_picker_offers_empty_choice_without_status() {
        assert_eq!(
            option_values(""),
            ["", "ACTIVE", "COMPLETED", "DROPPED", "FAILED", "WITHDRAWN"]
        );
    }

    #[test]
    fn missing_status_renders_as_na() {
        let enrollment = Enrollment {
            status: Some(Status::Withdrawn),
            ..Default::default()
        };
        assert_eq!(status_text(&enrollment), "WITHDRAWN");
        assert_eq!(status_text(&Enrollment::default()), "N/A");
    }

    #[test]
    fn zero_grade_is_a_grade() {
        let enrollment = Enrollment {
            grade: Some(0.0),
            ..Default::default()
        };
        assert_eq!(grade_text(&enrollment), "0");
    }
}
