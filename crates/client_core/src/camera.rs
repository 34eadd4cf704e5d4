//! Camera acquisition for the student dashboard.

use std::{
    fs,
    io::Cursor,
    path::{Path, PathBuf},
};

use base64::{engine::general_purpose::STANDARD, Engine as _};
use image::{DynamicImage, ImageFormat, Rgb, RgbImage};
use tracing::debug;

use crate::error::CameraError;

pub trait CameraSource: Send + Sync {
    /// Opens a video-only stream. The stream is released when the grabber drops.
    fn acquire(&self) -> Result<Box<dyn FrameGrabber>, CameraError>;
}

pub trait FrameGrabber: Send {
    /// Current frame as JPEG bytes.
    fn grab_jpeg(&mut self) -> Result<Vec<u8>, CameraError>;
}

pub fn to_data_url(jpeg: &[u8]) -> String {
    format!("data:image/jpeg;base64,{}", STANDARD.encode(jpeg))
}

/// Renders a moving test pattern in place of a physical device.
#[derive(Debug, Clone, Copy)]
pub struct SyntheticCamera {
    pub width: u32,
    pub height: u32,
}

impl Default for SyntheticCamera {
    fn default() -> Self {
        Self {
            width: 320,
            height: 180,
        }
    }
}

impl CameraSource for SyntheticCamera {
    fn acquire(&self) -> Result<Box<dyn FrameGrabber>, CameraError> {
        if self.width == 0 || self.height == 0 {
            return Err(CameraError::AccessDenied(
                "synthetic camera configured with an empty frame".to_string(),
            ));
        }
        debug!(width = self.width, height = self.height, "synthetic camera acquired");
        Ok(Box::new(SyntheticGrabber {
            width: self.width,
            height: self.height,
            frame: 0,
        }))
    }
}

struct SyntheticGrabber {
    width: u32,
    height: u32,
    frame: u32,
}

impl FrameGrabber for SyntheticGrabber {
    fn grab_jpeg(&mut self) -> Result<Vec<u8>, CameraError> {
        self.frame = self.frame.wrapping_add(1);
        let shift = self.frame.wrapping_mul(7);
        let (width, height) = (self.width, self.height);
        let image = RgbImage::from_fn(width, height, |x, y| {
            Rgb([
                ((x * 255 / width).wrapping_add(shift) % 256) as u8,
                ((y * 255 / height) % 256) as u8,
                (shift.wrapping_mul(3) % 256) as u8,
            ])
        });
        let mut out = Cursor::new(Vec::new());
        DynamicImage::ImageRgb8(image).write_to(&mut out, ImageFormat::Jpeg)?;
        Ok(out.into_inner())
    }
}

impl Drop for SyntheticGrabber {
    fn drop(&mut self) {
        debug!(frames = self.frame, "synthetic camera released");
    }
}

/// Replays one JPEG file from disk as every frame.
#[derive(Debug, Clone)]
pub struct StillFrameCamera {
    path: PathBuf,
}

impl StillFrameCamera {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl CameraSource for StillFrameCamera {
    fn acquire(&self) -> Result<Box<dyn FrameGrabber>, CameraError> {
        let bytes = fs::read(&self.path).map_err(|source| CameraError::Io {
            path: self.path.display().to_string(),
            source,
        })?;
        if image::guess_format(&bytes).ok() != Some(ImageFormat::Jpeg) {
            return Err(CameraError::NotJpeg);
        }
        Ok(Box::new(StillFrameGrabber { bytes }))
    }
}

struct StillFrameGrabber {
    bytes: Vec<u8>,
}

impl FrameGrabber for StillFrameGrabber {
    fn grab_jpeg(&mut self) -> Result<Vec<u8>, CameraError> {
        Ok(self.bytes.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn synthetic_frames_are_jpeg() {
        let mut grabber = SyntheticCamera::default().acquire().expect("acquire");
        let frame = grabber.grab_jpeg().expect("frame");
        assert_eq!(image::guess_format(&frame).ok(), Some(ImageFormat::Jpeg));
    }

    #[test]
    fn data_url_carries_jpeg_prefix() {
        let url = to_data_url(&[0xff, 0xd8, 0xff]);
        assert_eq!(url, "data:image/jpeg;base64,/9j/");
    }

    #[test]
    fn missing_still_frame_is_reported() {
        let camera = StillFrameCamera::new("/definitely/not/here.jpg");
        assert_eq!(camera.path(), std::path::Path::new("/definitely/not/here.jpg"));
        let err = camera.acquire().err().expect("must fail");
        assert!(matches!(err, CameraError::Io { .. }));
    }

    #[test]
    fn still_frame_must_be_jpeg() {
        let path = std::env::temp_dir().join(format!(
            "attendify_not_jpeg_{}.txt",
            std::process::id()
        ));
        fs::write(&path, b"plain text").expect("write");
        let err = StillFrameCamera::new(&path).acquire().err().expect("must fail");
        assert!(matches!(err, CameraError::NotJpeg));
        fs::remove_file(path).expect("cleanup");
    }
}
