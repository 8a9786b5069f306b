//! Mediates between the window and the generator.
//!
//! Every intent is handled to completion before the next one is read. Failures
//! are reported on the surface as an error notice *and* returned, so nothing
//! escapes to the event loop unannounced.

use std::path::Path;

use tracing::{debug, error, warn};

use crate::clipboard::ClipboardSink;
use crate::error::{Error, Result};
use crate::generator::QrGenerator;
use crate::launcher::{Launcher, MESSAGING_URL};
use crate::view::{self, Intent, Notice, Presentation};

pub struct Controller<C, L> {
    generator: QrGenerator,
    clipboard: C,
    launcher: L,
}

impl<C: ClipboardSink, L: Launcher> Controller<C, L> {
    pub fn new(generator: QrGenerator, clipboard: C, launcher: L) -> Self {
        Self {
            generator,
            clipboard,
            launcher,
        }
    }

    pub fn generator(&self) -> &QrGenerator {
        &self.generator
    }

    pub fn dispatch(&mut self, intent: Intent, surface: &mut impl Presentation) -> Result<()> {
        debug!(?intent, "dispatching");
        match intent {
            Intent::Generate(text) => self.on_generate(&text, surface),
            Intent::Save(path) => self.on_save(Some(path.as_path()), surface),
            Intent::Copy => self.on_copy(surface),
            Intent::OpenMessagingPage => {
                self.on_open_messaging_page();
                Ok(())
            }
        }
    }

    /// Generates a symbol from `text` and shows it.
    pub fn on_generate(&mut self, text: &str, surface: &mut impl Presentation) -> Result<()> {
        match self.generator.generate(text) {
            Ok(symbol) => {
                surface.display(symbol);
                Ok(())
            }
            Err(err) => Err(report(surface, err)),
        }
    }

    /// Saves the last symbol to `path` and tells the user how it went.
    pub fn on_save(&mut self, path: Option<&Path>, surface: &mut impl Presentation) -> Result<()> {
        match self.generator.persist(path) {
            Ok(()) => {
                surface.notify(Notice::info(view::SAVED_TITLE, view::SAVED_MESSAGE));
                Ok(())
            }
            Err(err) => {
                error!(error = %err, "save failed");
                surface.notify(Notice::error(format!("{} {err}", view::SAVE_FAILED_MESSAGE)));
                Err(err)
            }
        }
    }

    /// Copies the last symbol to the clipboard.
    pub fn on_copy(&mut self, surface: &mut impl Presentation) -> Result<()> {
        let Some(symbol) = self.generator.last_symbol() else {
            return Err(report(surface, Error::NoSymbol));
        };
        match self.clipboard.set_image(symbol) {
            Ok(()) => {
                surface.notify(Notice::info(view::COPIED_TITLE, view::COPIED_MESSAGE));
                Ok(())
            }
            Err(err) => Err(report(surface, err)),
        }
    }

    /// Opens the messaging page in the browser. Failures are only logged.
    pub fn on_open_messaging_page(&self) {
        if let Err(err) = self.launcher.open_url(MESSAGING_URL) {
            warn!(url = MESSAGING_URL, error = %err, "failed to open browser");
        }
    }
}

fn report(surface: &mut impl Presentation, err: Error) -> Error {
    error!(error = %err, "operation failed");
    surface.notify(Notice::from(&err));
    err
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clipboard::NoopClipboard;
    use crate::symbol::EncodedSymbol;
    use std::cell::RefCell;
    use std::io;

    #[derive(Default)]
    struct Surface {
        shown: Vec<String>,
        notices: Vec<Notice>,
    }

    impl Presentation for Surface {
        fn display(&mut self, symbol: &EncodedSymbol) {
            self.shown.push(symbol.text().to_string());
        }

        fn notify(&mut self, notice: Notice) {
            self.notices.push(notice);
        }
    }

    #[derive(Default)]
    struct Urls(RefCell<Vec<String>>);

    impl Launcher for Urls {
        fn open_url(&self, url: &str) -> io::Result<()> {
            self.0.borrow_mut().push(url.to_string());
            Ok(())
        }
    }

    struct BrokenBrowser;

    impl Launcher for BrokenBrowser {
        fn open_url(&self, _url: &str) -> io::Result<()> {
            Err(io::Error::new(io::ErrorKind::NotFound, "no browser"))
        }
    }

    #[test]
    fn test_generate_displays_symbol() {
        let mut controller = Controller::new(QrGenerator::new(), NoopClipboard, Urls::default());
        let mut surface = Surface::default();
        controller
            .dispatch(Intent::Generate("hello".into()), &mut surface)
            .unwrap();
        assert_eq!(surface.shown, vec!["hello"]);
        assert!(surface.notices.is_empty());
    }

    #[test]
    fn test_encoder_failure_is_reported() {
        let mut controller = Controller::new(QrGenerator::new(), NoopClipboard, Urls::default());
        let mut surface = Surface::default();
        let err = controller
            .on_generate(&"x".repeat(8000), &mut surface)
            .unwrap_err();
        assert!(matches!(err, Error::Encode(_)));
        assert!(surface.shown.is_empty());
        assert_eq!(surface.notices.len(), 1);
        assert_eq!(surface.notices[0].level, view::NoticeLevel::Error);
    }

    #[test]
    fn test_save_without_symbol_reports_failure() {
        let mut controller = Controller::new(QrGenerator::new(), NoopClipboard, Urls::default());
        let mut surface = Surface::default();
        let err = controller
            .on_save(Some(Path::new("unused.png")), &mut surface)
            .unwrap_err();
        assert!(matches!(err, Error::NoSymbol));
        assert!(surface.notices[0].message.starts_with(view::SAVE_FAILED_MESSAGE));
    }

    #[test]
    fn test_copy_without_clipboard_reports_error() {
        let mut controller = Controller::new(QrGenerator::new(), NoopClipboard, Urls::default());
        let mut surface = Surface::default();
        controller.on_generate("hello", &mut surface).unwrap();

        let err = controller
            .dispatch(Intent::Copy, &mut surface)
            .unwrap_err();

        assert!(matches!(err, Error::Clipboard(_)));
        assert_eq!(surface.notices.len(), 1);
        assert_eq!(surface.notices[0].level, view::NoticeLevel::Error);
        assert_ne!(surface.notices[0].message, view::COPIED_MESSAGE);
    }

    #[test]
    fn test_open_messaging_page() {
        let controller = Controller::new(QrGenerator::new(), NoopClipboard, Urls::default());
        controller.on_open_messaging_page();
        assert_eq!(*controller.launcher.0.borrow(), vec![MESSAGING_URL]);
    }

    #[test]
    fn test_browser_failure_is_swallowed() {
        let mut controller = Controller::new(QrGenerator::new(), NoopClipboard, BrokenBrowser);
        let mut surface = Surface::default();
        controller
            .dispatch(Intent::OpenMessagingPage, &mut surface)
            .unwrap();
        assert!(surface.notices.is_empty());
    }
}
