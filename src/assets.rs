//! Sprites and their background loader.
//!
//! Sprites are small text bitmaps: one character per pixel, looked up in a
//! fixed palette, with `.` or space for transparent. They load on a worker
//! thread; until then `Assets` holds empty images, which every surface draws
//! as a no-op.

use crate::core::error::FlappyError;
use crate::render::Rgb;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::thread::{self, JoinHandle};
use tracing::{debug, info};

const BIRD_SPRITE: &str = "\
..YYYY..
.YYYWKY.
YYYYYYOO
YWWYYYOO
.YYYYY..
..YYY...";

const OBSTACLE_SPRITE: &str = "\
DGGLLGGD
DGGLLGGD
DGGLLGGD
DGGLLGGD";

pub const BIRD_SPRITE_FILE: &str = "bird.txt";
pub const OBSTACLE_SPRITE_FILE: &str = "obstacle.txt";

fn palette(ch: char) -> Option<Option<Rgb>> {
    match ch {
        '.' | ' ' => Some(None),
        'Y' => Some(Some(Rgb::GOLD)),
        'W' => Some(Some(Rgb::WHITE)),
        'K' => Some(Some(Rgb::TEXT)),
        'O' => Some(Some(Rgb::BEAK)),
        'G' => Some(Some(Rgb::PIPE)),
        'D' => Some(Some(Rgb::PIPE_DARK)),
        'L' => Some(Some(Rgb(145, 215, 62))),
        _ => None,
    }
}

/// A decoded bitmap. Zero-sized until something is loaded into it.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Image {
    width: usize,
    height: usize,
    /// Row-major; `None` is transparent.
    pixels: Vec<Option<Rgb>>,
}

impl Image {
    pub fn empty() -> Self {
        Self::default()
    }

    /// Decode a text sprite. Rows shorter than the widest one are padded with
    /// transparency.
    pub fn parse(text: &str) -> Result<Self, String> {
        let rows: Vec<&str> = text.lines().filter(|line| !line.is_empty()).collect();
        let width = rows.iter().map(|row| row.chars().count()).max().unwrap_or(0);
        let height = rows.len();

        let mut pixels = Vec::with_capacity(width * height);
        for (row_idx, row) in rows.iter().enumerate() {
            let mut count = 0;
            for (col_idx, ch) in row.chars().enumerate() {
                let pixel = palette(ch).ok_or_else(|| {
                    format!(
                        "unknown colour '{}' at row {}, column {}",
                        ch,
                        row_idx + 1,
                        col_idx + 1
                    )
                })?;
                pixels.push(pixel);
                count += 1;
            }
            pixels.extend(std::iter::repeat(None).take(width - count));
        }

        Ok(Self {
            width,
            height,
            pixels,
        })
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0
    }

    /// Colour at `(x, y)`, or `None` if transparent or out of range.
    pub fn pixel(&self, x: usize, y: usize) -> Option<Rgb> {
        if x >= self.width || y >= self.height {
            return None;
        }
        self.pixels[y * self.width + x]
    }
}

/// The two decorative sprites the renderer uses.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Assets {
    pub bird: Image,
    pub obstacle: Image,
}

impl Assets {
    /// Built-in sprites.
    pub fn builtin() -> Result<Self, FlappyError> {
        Ok(Self {
            bird: parse_builtin(BIRD_SPRITE)?,
            obstacle: parse_builtin(OBSTACLE_SPRITE)?,
        })
    }

    /// Sprites from `dir`, falling back to the built-in one for each file
    /// that doesn't exist.
    pub fn load(dir: Option<&Path>) -> Result<Self, FlappyError> {
        let Some(dir) = dir else {
            return Self::builtin();
        };
        Ok(Self {
            bird: load_sprite(&dir.join(BIRD_SPRITE_FILE), BIRD_SPRITE)?,
            obstacle: load_sprite(&dir.join(OBSTACLE_SPRITE_FILE), OBSTACLE_SPRITE)?,
        })
    }
}

fn parse_builtin(text: &str) -> Result<Image, FlappyError> {
    Image::parse(text).map_err(|reason| FlappyError::Asset {
        path: PathBuf::from("<builtin>"),
        reason,
    })
}

fn load_sprite(path: &Path, fallback: &str) -> Result<Image, FlappyError> {
    match fs::read_to_string(path) {
        Ok(text) => {
            debug!(path = %path.display(), "loading sprite");
            Image::parse(&text).map_err(|reason| FlappyError::Asset {
                path: path.to_path_buf(),
                reason,
            })
        }
        Err(e) if e.kind() == io::ErrorKind::NotFound => parse_builtin(fallback),
        Err(e) => Err(e.into()),
    }
}

/// Loads `Assets` on a worker thread so the first frames can draw without
/// waiting. Poll it from the host loop.
pub struct AssetLoader {
    handle: Option<JoinHandle<Result<Assets, FlappyError>>>,
}

impl AssetLoader {
    pub fn spawn(dir: Option<PathBuf>) -> Self {
        let handle = thread::spawn(move || Assets::load(dir.as_deref()));
        Self {
            handle: Some(handle),
        }
    }

    pub fn is_pending(&self) -> bool {
        self.handle.is_some()
    }

    /// `Some` exactly once, when the worker has finished.
    pub fn poll(&mut self) -> Option<Result<Assets, FlappyError>> {
        let handle = self.handle.take()?;
        if !handle.is_finished() {
            // Not finished yet, put it back
            self.handle = Some(handle);
            return None;
        }

        let result = handle.join().unwrap_or_else(|_| {
            Err(FlappyError::Asset {
                path: PathBuf::from("<loader>"),
                reason: "loader thread panicked".to_string(),
            })
        });
        if result.is_ok() {
            info!("sprites loaded");
        }
        Some(result)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_sprites_parse() {
        let assets = Assets::builtin().unwrap();
        assert_eq!(assets.bird.width(), 8);
        assert_eq!(assets.bird.height(), 6);
        assert!(!assets.obstacle.is_empty());
    }

    #[test]
    fn test_default_assets_are_empty() {
        let assets = Assets::default();
        assert!(assets.bird.is_empty());
        assert!(assets.obstacle.is_empty());
    }

    #[test]
    fn test_parse_pads_short_rows() {
        let image = Image::parse("YY\nY").unwrap();
        assert_eq!(image.width(), 2);
        assert_eq!(image.height(), 2);
        assert_eq!(image.pixel(0, 1), Some(Rgb::GOLD));
        assert_eq!(image.pixel(1, 1), None);
    }

    #[test]
    fn test_parse_rejects_unknown_colour() {
        let err = Image::parse("YZ").unwrap_err();
        assert!(err.contains("'Z'"));
    }

    #[test]
    fn test_pixel_out_of_range_is_transparent() {
        let image = Image::parse("Y").unwrap();
        assert_eq!(image.pixel(5, 5), None);
        assert_eq!(Image::empty().pixel(0, 0), None);
    }

    #[test]
    fn test_missing_files_fall_back_to_builtin() {
        let dir = std::env::temp_dir().join("flappy_assets_missing_test");
        let assets = Assets::load(Some(&dir)).unwrap();
        assert_eq!(assets, Assets::builtin().unwrap());
    }

    #[test]
    fn test_sprite_file_overrides_builtin() {
        let dir = std::env::temp_dir().join("flappy_assets_override_test");
        fs::create_dir_all(&dir).unwrap();
        fs::write(dir.join(BIRD_SPRITE_FILE), "YY\nYY\n").unwrap();

        let assets = Assets::load(Some(&dir)).unwrap();
        assert_eq!(assets.bird.width(), 2);
        assert_eq!(assets.obstacle, Assets::builtin().unwrap().obstacle);

        fs::remove_dir_all(dir).ok();
    }

    #[test]
    fn test_loader_delivers_once() {
        let mut loader = AssetLoader::spawn(None);
        let mut result = None;
        for _ in 0..500 {
            if let Some(r) = loader.poll() {
                result = Some(r);
                break;
            }
            thread::sleep(std::time::Duration::from_millis(2));
        }

        assert!(result.expect("loader should finish").is_ok());
        assert!(!loader.is_pending());
        assert!(loader.poll().is_none());
    }
}
