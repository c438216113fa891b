pub mod contact_form;
pub mod view;

pub use contact_form::{ContactFormUI, Focus, FormAction};
pub use view::{ContactFormView, Region, RegionId};
