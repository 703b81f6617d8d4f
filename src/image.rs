/// An opaque, immutable owner of captured pixel data.
///
/// The core never interprets pixel contents; it only ever moves `Image`
/// values between a capture effect and a classify effect.
#[derive(Clone, PartialEq, Eq)]
pub struct Image {
    width: u32,
    height: u32,
    channels: u8,
    bytes: Vec<u8>,
}

impl Image {
    pub fn new(width: u32, height: u32, channels: u8, bytes: Vec<u8>) -> Self {
        Self {
            width,
            height,
            channels,
            bytes,
        }
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn channels(&self) -> u8 {
        self.channels
    }

    pub fn bytes(&self) -> &[u8] {
        &self.bytes
    }
}

impl std::fmt::Debug for Image {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Image")
            .field("width", &self.width)
            .field("height", &self.height)
            .field("channels", &self.channels)
            .field("bytes", &self.bytes.len())
            .finish()
    }
}
