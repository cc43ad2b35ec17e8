use actix_multipart::form::{MultipartForm, text::Text};
use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationErrors};

/// Raw submission as it arrives on the wire.
///
/// Every field may be absent. `user_id`, `job_id` and `email` must be
/// present and non-empty; the rest default to the empty string.
#[derive(Debug, Clone, Default, Deserialize, Serialize, Validate)]
pub struct ApplicationForm {
    #[validate(
        required(message = "user_id is required"),
        length(min = 1, message = "user_id is required")
    )]
    pub user_id: Option<String>,
    #[validate(
        required(message = "job_id is required"),
        length(min = 1, message = "job_id is required")
    )]
    pub job_id: Option<String>,
    pub name: Option<String>,
    #[validate(
        required(message = "email is required"),
        length(min = 1, message = "email is required")
    )]
    pub email: Option<String>,
    pub phone: Option<String>,
    pub cover_letter: Option<String>,
    pub experience: Option<String>,
    pub additional_notes: Option<String>,
}

impl ApplicationForm {
    /// Validate and convert into an insertable application
    pub fn into_new_application(self) -> Result<NewApplication, ValidationErrors> {
        self.validate()?;

        Ok(NewApplication {
            user_id: self.user_id.unwrap_or_default(),
            job_id: self.job_id.unwrap_or_default(),
            name: self.name.unwrap_or_default(),
            email: self.email.unwrap_or_default(),
            phone: self.phone.unwrap_or_default(),
            cover_letter: self.cover_letter.unwrap_or_default(),
            experience: self.experience.unwrap_or_default(),
            additional_notes: self.additional_notes.unwrap_or_default(),
        })
    }
}

/// Comma-separated, sorted names of the fields that failed validation
pub fn missing_field_names(errors: &ValidationErrors) -> String {
    let mut fields: Vec<String> = errors
        .field_errors()
        .keys()
        .map(|field| field.to_string())
        .collect();
    fields.sort();
    format!("missing required fields: {}", fields.join(", "))
}

/// Multipart variant of [`ApplicationForm`]
#[derive(Debug, MultipartForm)]
pub struct ApplicationUpload {
    pub user_id: Option<Text<String>>,
    pub job_id: Option<Text<String>>,
    pub name: Option<Text<String>>,
    pub email: Option<Text<String>>,
    pub phone: Option<Text<String>>,
    pub cover_letter: Option<Text<String>>,
    pub experience: Option<Text<String>>,
    pub additional_notes: Option<Text<String>>,
}

impl From<ApplicationUpload> for ApplicationForm {
    fn from(upload: ApplicationUpload) -> Self {
        let text = |field: Option<Text<String>>| field.map(Text::into_inner);

        ApplicationForm {
            user_id: text(upload.user_id),
            job_id: text(upload.job_id),
            name: text(upload.name),
            email: text(upload.email),
            phone: text(upload.phone),
            cover_letter: text(upload.cover_letter),
            experience: text(upload.experience),
            additional_notes: text(upload.additional_notes),
        }
    }
}

/// A validated application ready to be written
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewApplication {
    pub user_id: String,
    pub job_id: String,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub cover_letter: String,
    pub experience: String,
    pub additional_notes: String,
}
