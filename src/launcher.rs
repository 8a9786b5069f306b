//! Opening external pages in the default browser.

use std::io;

/// Page opened by the "Open WhatsApp Web" button.
pub const MESSAGING_URL: &str = "https://web.whatsapp.com";

pub trait Launcher {
    fn open_url(&self, url: &str) -> io::Result<()>;
}

/// The system default browser.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemBrowser;

impl Launcher for SystemBrowser {
    fn open_url(&self, url: &str) -> io::Result<()> {
        open::that(url)
    }
}
