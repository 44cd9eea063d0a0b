//! # Views
//!
//! The two screens of the front end as plain state machines, independent of
//! how they are displayed. The CLI prints them, the local web front end renders
//! them as HTML.
//!
//! - [`HomeView`] - loads the collection on mount, creates new short URLs,
//!   copies links
//! - [`RedirectView`] - resolves one short code at a time
//!
//! Both take the service as `Arc<dyn ShortUrlApi>` and report user-facing
//! outcomes through a [`Notifier`]. Neither lets a failure escape without
//! clearing its pending flag.
//!
//! [`ShortUrlApi`]: crate::service::ShortUrlApi

mod clipboard;
mod home;
mod notify;
mod redirect;

pub use clipboard::{Clipboard, SystemClipboard};
pub use home::{
    HomeState, HomeView, MSG_COPIED, MSG_COPY_FAILED, MSG_CREATE_FAILED, MSG_CREATED,
    MSG_EMPTY_INPUT, Phase,
};
pub use notify::{CollectingNotifier, ConsoleNotifier, Level, Notification, Notifier};
pub use redirect::{MSG_REDIRECT_FAILED, RedirectState, RedirectView};

#[cfg(test)]
pub use clipboard::MockClipboard;
#[cfg(test)]
pub use notify::MockNotifier;
