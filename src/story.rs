//! Story content: the compile-time constants the screen renders

/// The bundled header photograph (PNG, embedded at build time).
pub const HEADER_IMAGE: &[u8] = include_bytes!("../assets/header.png");

/// A story card: three lines of text and an optional header image.
///
/// All fields are baked constants with no lifecycle. The struct exists so
/// the renderer and the tests share one definition.
#[derive(Clone, Copy)]
pub struct Story {
    pub headline: &'static str,
    pub location: &'static str,
    pub date: &'static str,
    pub header_image: Option<&'static [u8]>,
}

impl Story {
    /// The one story this app shows.
    pub const fn sample() -> Self {
        Self {
            headline: "A day wandering through the sandhills in Shark Fin Cove, \
                       and a few of the sights I saw",
            location: "Davenport, California",
            date: "December 2018",
            header_image: Some(HEADER_IMAGE),
        }
    }
}
