use crate::modules::upload::application::orchestrator::FilePreview;

/// Which mutation a submit maps to. Carried explicitly so edit mode never
/// has to be inferred from the presence of an id.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormMode {
    Create,
    Edit { id: i32 },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormState {
    Idle,
    Submitting,
    Success,
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GalleryForm {
    pub mode: FormMode,
    pub state: FormState,
    pub dialog_open: bool,
    pub name: String,
    pub description: String,
    pub previews: Vec<FilePreview>,
    pub validation_error: Option<String>,
}

impl Default for GalleryForm {
    fn default() -> Self {
        Self {
            mode: FormMode::Create,
            state: FormState::Idle,
            dialog_open: false,
            name: String::new(),
            description: String::new(),
            previews: Vec::new(),
            validation_error: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormEvent {
    DialogOpened,
    EditRequested {
        id: i32,
        name: String,
        description: Option<String>,
        image_path: String,
    },
    FieldsChanged {
        name: String,
        description: String,
    },
    FilesSelected(Vec<FilePreview>),
    SubmitRequested,
    UploadFailed,
    MutationFailed,
    MutationSucceeded,
    DialogClosed,
}

/// Pure transition function. IO-free so every path is testable without a
/// runtime; the async driver lives in [`super::session`].
pub fn apply(form: GalleryForm, event: FormEvent) -> GalleryForm {
    let busy = form.state == FormState::Submitting;

    match event {
        FormEvent::DialogOpened => GalleryForm {
            dialog_open: true,
            ..GalleryForm::default()
        },
        FormEvent::EditRequested {
            id,
            name,
            description,
            image_path,
        } => {
            if busy {
                return form;
            }
            GalleryForm {
                mode: FormMode::Edit { id },
                state: FormState::Idle,
                dialog_open: true,
                name,
                description: description.unwrap_or_default(),
                previews: vec![FilePreview::persisted(image_path)],
                validation_error: None,
            }
        }
        FormEvent::FieldsChanged { name, description } => {
            if busy {
                return form;
            }
            GalleryForm {
                name,
                description,
                ..form
            }
        }
        // A new selection replaces the whole list, never appends.
        FormEvent::FilesSelected(previews) => {
            if busy {
                return form;
            }
            GalleryForm { previews, ..form }
        }
        FormEvent::SubmitRequested => {
            if busy {
                return form;
            }
            if form.name.trim().is_empty() {
                return GalleryForm {
                    validation_error: Some("name must not be empty".to_string()),
                    ..form
                };
            }
            if form.mode == FormMode::Create && form.previews.is_empty() {
                return GalleryForm {
                    validation_error: Some("an image must be selected".to_string()),
                    ..form
                };
            }
            GalleryForm {
                state: FormState::Submitting,
                validation_error: None,
                ..form
            }
        }
        FormEvent::UploadFailed | FormEvent::MutationFailed => GalleryForm {
            state: FormState::Error,
            ..form
        },
        FormEvent::MutationSucceeded => GalleryForm {
            state: FormState::Success,
            ..GalleryForm::default()
        },
        FormEvent::DialogClosed => GalleryForm::default(),
    }
}
