mod catalog;
mod registration;

pub use catalog::{GalleryImage, Trainer, Workshop, WORKSHOPS, workshop_by_slug};
pub use registration::{
	email_looks_valid,
	submission_fields,
	MissingField,
	RegistrationDraft,
	SubmissionState
};
