// Reusable UI widgets

pub mod dialog;
pub mod toast;

pub use dialog::Dialog;
pub use toast::{Toast, ToastManager, ToastVariant, ToastWidget};
