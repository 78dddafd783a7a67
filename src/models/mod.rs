mod contact;
mod response;

pub use contact::{Contact, ContactSubmission, NewContact};
pub use response::{ContactResponse, NewResponse, ResponseSubmission};
