pub mod contact_submission;
