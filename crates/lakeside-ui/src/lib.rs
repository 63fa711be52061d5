//! Small page interactions, independent of the backdrop.
//!
//! Both handlers are stateless: they react to one event at a time and reach
//! the page only through the ports they are handed ([`Acknowledge`],
//! [`TransformTarget`]).

mod form;
mod pointer;
mod tilt;

pub use form::{Acknowledge, CONTACT_FORM_ID, FormInterceptor, SUBMIT_ACKNOWLEDGEMENT, SubmitEvent};
pub use pointer::{PointerEvent, PointerRouter};
pub use tilt::{TILT_SENSITIVITY, Tilt, TiltCard, TransformTarget, tilt_at};
