//! Contact form: model, controller and persistence gateways

#[cfg(feature = "ssr")]
pub mod api;
pub mod controller;
pub mod gateway;
pub mod model;
#[cfg(feature = "ssr")]
pub mod supabase;

#[cfg(feature = "ssr")]
pub use api::contact_api_router;
pub use controller::{
    FieldVisibility, FormController, INVALID_FORM_MESSAGE, Outcome, SubmitButton, SubmitRejected,
    SubmitState,
};
pub use gateway::{GatewayError, GatewayResult, RemoteError, SubmissionGateway};
pub use model::{
    ContactField, ContactForm, ContactFormError, ContactSubmission, OTHERS_SENTINEL,
    ServiceOption, StoredSubmission,
};
#[cfg(feature = "ssr")]
pub use supabase::SupabaseGateway;
