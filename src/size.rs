//! Window size for the PTY

use std::os::unix::io::RawFd;

use nix::pty::Winsize;

/// Terminal window size in characters and pixels
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WindowSize {
    /// Number of rows (lines)
    pub rows: u16,
    /// Number of columns (characters per line)
    pub cols: u16,
    /// Width in pixels (optional, can be 0)
    pub pixel_width: u16,
    /// Height in pixels (optional, can be 0)
    pub pixel_height: u16,
}

impl WindowSize {
    /// Create a new window size
    pub fn new(rows: u16, cols: u16) -> Self {
        WindowSize {
            rows,
            cols,
            pixel_width: 0,
            pixel_height: 0,
        }
    }

    /// Create a new window size with pixel dimensions
    pub fn with_pixels(rows: u16, cols: u16, pixel_width: u16, pixel_height: u16) -> Self {
        WindowSize {
            rows,
            cols,
            pixel_width,
            pixel_height,
        }
    }

    /// Convert to the winsize structure passed to the OS
    pub fn to_winsize(&self) -> Winsize {
        Winsize {
            ws_row: self.rows,
            ws_col: self.cols,
            ws_xpixel: self.pixel_width,
            ws_ypixel: self.pixel_height,
        }
    }

    /// Read the current window size from a PTY file descriptor
    pub fn get_from_fd(fd: RawFd) -> std::io::Result<Self> {
        let mut ws: Winsize = unsafe { std::mem::zeroed() };
        // On macOS TIOCGWINSZ is u32 but ioctl expects c_ulong, so cast
        // explicitly for cross-platform compatibility.
        let result = unsafe { libc::ioctl(fd, libc::TIOCGWINSZ as libc::c_ulong, &mut ws) };
        if result == -1 {
            Err(std::io::Error::last_os_error())
        } else {
            Ok(WindowSize::from(ws))
        }
    }
}

impl Default for WindowSize {
    fn default() -> Self {
        WindowSize::new(24, 80)
    }
}

impl From<Winsize> for WindowSize {
    fn from(ws: Winsize) -> Self {
        WindowSize {
            rows: ws.ws_row,
            cols: ws.ws_col,
            pixel_width: ws.ws_xpixel,
            pixel_height: ws.ws_ypixel,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_constructors_fill_fields() {
        let plain = WindowSize::new(40, 120);
        assert_eq!((plain.rows, plain.cols), (40, 120));
        assert_eq!((plain.pixel_width, plain.pixel_height), (0, 0));

        let with_px = WindowSize::with_pixels(40, 120, 960, 640);
        assert_eq!((with_px.pixel_width, with_px.pixel_height), (960, 640));

        assert_eq!(WindowSize::default(), WindowSize::new(24, 80));
    }

    proptest! {
        #[test]
        fn winsize_conversion_preserves_fields(
            rows in 0u16..=u16::MAX,
            cols in 0u16..=u16::MAX,
            px in 0u16..=u16::MAX,
            py in 0u16..=u16::MAX,
        ) {
            let size = WindowSize::with_pixels(rows, cols, px, py);
            prop_assert_eq!(WindowSize::from(size.to_winsize()), size);
        }
    }
}
