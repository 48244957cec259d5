//! Raster: A fixed-size pixel grid with clipped drawing primitives.
//!
//! Pixels are stored in a contiguous `Vec` in row-major order, the same
//! layout the compositor uses for terminal cells. Drawing primitives
//! clip silently at the edges, so composition passes can position
//! shapes relative to jittered bounds without edge checks of their own.

/// Side length of a composed portrait in pixels.
pub const PORTRAIT_SIZE: u16 = 32;

/// True-color RGB representation.
#[repr(C)]
#[derive(Clone, Copy, PartialEq, Eq, Default, Hash)]
pub struct Rgb {
    /// Red channel (0-255)
    pub r: u8,
    /// Green channel (0-255)
    pub g: u8,
    /// Blue channel (0-255)
    pub b: u8,
}

impl Rgb {
    /// Create a new RGB color.
    #[inline]
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Black (0, 0, 0)
    pub const BLACK: Self = Self::new(0, 0, 0);
    /// White (255, 255, 255)
    pub const WHITE: Self = Self::new(255, 255, 255);

    /// Create from a 24-bit hex color (e.g., 0xFF5500).
    #[inline]
    pub const fn from_u32(hex: u32) -> Self {
        Self::new(
            ((hex >> 16) & 0xFF) as u8,
            ((hex >> 8) & 0xFF) as u8,
            (hex & 0xFF) as u8,
        )
    }

    /// Blend `top` over `self` with the given alpha in `[0, 1]`.
    #[inline]
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    pub fn blend(self, top: Self, alpha: f64) -> Self {
        let alpha = alpha.clamp(0.0, 1.0);
        let mix = |under: u8, over: u8| {
            (f64::from(over) * alpha + f64::from(under) * (1.0 - alpha)).round() as u8
        };
        Self::new(mix(self.r, top.r), mix(self.g, top.g), mix(self.b, top.b))
    }
}

impl std::fmt::Debug for Rgb {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

impl From<(u8, u8, u8)> for Rgb {
    #[inline]
    fn from((r, g, b): (u8, u8, u8)) -> Self {
        Self::new(r, g, b)
    }
}

impl From<u32> for Rgb {
    /// Convert from a 24-bit hex color (e.g., 0xFF5500)
    #[inline]
    fn from(hex: u32) -> Self {
        Self::from_u32(hex)
    }
}

/// A grid of pixels produced by portrait composition.
///
/// The raster is write-only derived output: passes fill rectangles and
/// overlay gradients, and the finished grid is read back for display or
/// export. Each composition mutates one raster exclusively for its
/// duration.
#[derive(Clone, PartialEq, Eq)]
pub struct Raster {
    /// Contiguous pixel storage (row-major order).
    pixels: Vec<Rgb>,
    /// Width in pixels.
    width: u16,
    /// Height in pixels.
    height: u16,
}

impl Raster {
    /// Create a raster filled with black.
    ///
    /// # Panics
    /// Panics if width or height is 0.
    pub fn new(width: u16, height: u16) -> Self {
        assert!(width > 0 && height > 0, "Raster dimensions must be non-zero");
        let size = (width as usize) * (height as usize);
        Self {
            pixels: vec![Rgb::BLACK; size],
            width,
            height,
        }
    }

    /// Create a portrait-sized raster.
    pub fn portrait() -> Self {
        Self::new(PORTRAIT_SIZE, PORTRAIT_SIZE)
    }

    /// Get the raster width.
    #[inline]
    pub const fn width(&self) -> u16 {
        self.width
    }

    /// Get the raster height.
    #[inline]
    pub const fn height(&self) -> u16 {
        self.height
    }

    /// Get a reference to the underlying pixel slice.
    #[inline]
    pub fn pixels(&self) -> &[Rgb] {
        &self.pixels
    }

    /// Convert (x, y) coordinates to a linear index.
    ///
    /// Returns `None` if coordinates are out of bounds.
    #[inline]
    pub fn index_of(&self, x: u16, y: u16) -> Option<usize> {
        if x < self.width && y < self.height {
            Some((y as usize) * (self.width as usize) + (x as usize))
        } else {
            None
        }
    }

    /// Get the pixel at (x, y).
    ///
    /// Returns `None` if coordinates are out of bounds.
    #[inline]
    pub fn get(&self, x: u16, y: u16) -> Option<Rgb> {
        self.index_of(x, y).map(|i| self.pixels[i])
    }

    /// Set the pixel at (x, y).
    ///
    /// Returns `false` if coordinates are out of bounds.
    #[inline]
    pub fn set(&mut self, x: u16, y: u16, color: Rgb) -> bool {
        if let Some(idx) = self.index_of(x, y) {
            self.pixels[idx] = color;
            true
        } else {
            false
        }
    }

    /// Fill the entire raster with one color.
    pub fn fill(&mut self, color: Rgb) {
        self.pixels.fill(color);
    }

    /// Fill a rectangle, clipping against the raster bounds.
    ///
    /// Coordinates are signed so callers can position shapes relative to
    /// jittered anchors that may poke past an edge.
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    pub fn fill_rect(&mut self, x: i32, y: i32, width: u16, height: u16, color: Rgb) {
        let x1 = (x + i32::from(width)).clamp(0, i32::from(self.width)) as u16;
        let y1 = (y + i32::from(height)).clamp(0, i32::from(self.height)) as u16;
        let x0 = x.clamp(0, i32::from(self.width)) as u16;
        let y0 = y.clamp(0, i32::from(self.height)) as u16;

        for py in y0..y1 {
            let row = (py as usize) * (self.width as usize);
            for px in x0..x1 {
                self.pixels[row + px as usize] = color;
            }
        }
    }

    /// Overlay a radial glow centered on a focal point.
    ///
    /// Alpha is `peak_alpha` inside `inner` radius and falls off linearly
    /// to zero at `outer` radius, blended over the existing pixels.
    pub fn radial_glow(
        &mut self,
        center_x: f64,
        center_y: f64,
        inner: f64,
        outer: f64,
        color: Rgb,
        peak_alpha: f64,
    ) {
        if outer <= inner {
            return;
        }
        for y in 0..self.height {
            for x in 0..self.width {
                let dx = f64::from(x) + 0.5 - center_x;
                let dy = f64::from(y) + 0.5 - center_y;
                let dist = dx.hypot(dy);
                let t = ((dist - inner) / (outer - inner)).clamp(0.0, 1.0);
                let alpha = peak_alpha * (1.0 - t);
                if alpha > 0.0 {
                    let idx = (y as usize) * (self.width as usize) + (x as usize);
                    self.pixels[idx] = self.pixels[idx].blend(color, alpha);
                }
            }
        }
    }

    /// Export the grid as packed RGB bytes, row-major.
    pub fn to_bytes(&self) -> Vec<u8> {
        let mut bytes = Vec::with_capacity(self.pixels.len() * 3);
        for px in &self.pixels {
            bytes.extend_from_slice(&[px.r, px.g, px.b]);
        }
        bytes
    }
}

impl std::fmt::Debug for Raster {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Raster({}x{})", self.width, self.height)
    }
}
