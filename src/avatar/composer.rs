//! Portrait composition: ordered drawing passes over a 32×32 raster.
//!
//! Composition is a fixed sequence of passes, each consuming fresh
//! generator draws: backdrop, figure, hair, face, accessory, speckle.
//! For a fixed seed the output is byte-reproducible; no draw is reused
//! across passes and no state outlives the composition.

use super::palette;
use super::raster::{Raster, Rgb};
use super::rng::PortraitRng;
use super::seed::{SeedMixer, SelectionFingerprint};

/// Horizontal center of the portrait.
const CENTER_X: i32 = 16;
/// Top edge of the head block.
const HEAD_Y: i32 = 10;

/// Palette choices resolved once at the start of a composition and
/// immutable thereafter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AvatarSpec {
    /// Skin tone for head and neck.
    pub skin: Rgb,
    /// Hair color.
    pub hair: Rgb,
    /// Garment color for the torso block.
    pub garment: Rgb,
    /// Darker garment tone for shading and sleeves.
    pub garment_shadow: Rgb,
    /// Pants color.
    pub pants: Rgb,
    /// Eye color.
    pub eye: Rgb,
    /// Accessory color.
    pub accessory: Rgb,
    /// Deep background tone.
    pub background_deep: Rgb,
    /// Hazy background tone for noise specks.
    pub background_haze: Rgb,
}

impl AvatarSpec {
    /// Resolve every palette role with one draw each, in a fixed order.
    fn resolve(rng: &mut PortraitRng) -> Self {
        Self {
            skin: *rng.pick(&palette::SKIN),
            hair: *rng.pick(&palette::HAIR),
            garment: *rng.pick(&palette::GARMENT),
            garment_shadow: *rng.pick(&palette::GARMENT_SHADOW),
            pants: *rng.pick(&palette::PANTS),
            eye: *rng.pick(&palette::EYE),
            accessory: *rng.pick(&palette::ACCESSORY),
            background_deep: *rng.pick(&palette::BACKGROUND_DEEP),
            background_haze: *rng.pick(&palette::BACKGROUND_HAZE),
        }
    }
}

/// Hair layouts, positioned relative to the head bounds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HairStyle {
    /// Full cap with short fringes down both temples.
    Fringed,
    /// Thin band with a small tuft on top.
    Tufted,
    /// Cap with long strands draped past the ears.
    Draped,
    /// Flat, close-cropped cut.
    Cropped,
    /// Band with a raised center crest.
    Peaked,
}

impl HairStyle {
    fn draw(rng: &mut PortraitRng) -> Self {
        match rng.index(5) {
            0 => Self::Fringed,
            1 => Self::Tufted,
            2 => Self::Draped,
            3 => Self::Cropped,
            _ => Self::Peaked,
        }
    }
}

/// Eye layouts, offset scaled to the head width.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EyeStyle {
    /// Symmetric single-pixel dots.
    Dots,
    /// Wide two-pixel dashes.
    Dashes,
    /// Vertical two-pixel slits.
    Slits,
}

impl EyeStyle {
    fn draw(rng: &mut PortraitRng) -> Self {
        match rng.index(3) {
            0 => Self::Dots,
            1 => Self::Dashes,
            _ => Self::Slits,
        }
    }
}

/// Mouth layouts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MouthStyle {
    /// Four-pixel bar.
    Wide,
    /// Two-pixel bar.
    Small,
    /// Two separated corner pixels.
    Parted,
}

impl MouthStyle {
    fn draw(rng: &mut PortraitRng) -> Self {
        match rng.index(3) {
            0 => Self::Wide,
            1 => Self::Small,
            _ => Self::Parted,
        }
    }
}

/// Accessory layouts, positioned relative to the head bounds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AccessoryStyle {
    /// Band across the eye line with a bridge pixel.
    Headband,
    /// Collar under the chin.
    Collar,
    /// Side drops joined by a frame line.
    Earrings,
    /// Brim stacked above the hairline.
    Brim,
}

impl AccessoryStyle {
    fn draw(rng: &mut PortraitRng) -> Self {
        match rng.index(4) {
            0 => Self::Headband,
            1 => Self::Collar,
            2 => Self::Earrings,
            _ => Self::Brim,
        }
    }
}

/// Head placement resolved by the figure pass and consumed by the
/// hair, face, and accessory passes.
#[derive(Debug, Clone, Copy)]
struct HeadBounds {
    x: i32,
    y: i32,
    width: i32,
    height: i32,
}

/// Layered procedural rasterizer producing one portrait per instance.
///
/// The composer owns its generator state exclusively; composing consumes
/// the instance, so a seed can never leak into a second generation.
#[derive(Debug)]
pub struct AvatarComposer {
    rng: PortraitRng,
    populated: bool,
}

impl AvatarComposer {
    /// Create a composer from a raw seed.
    ///
    /// `populated` selects the denser foreground speckle used when a
    /// real fingerprint (rather than the placeholder) seeded the draw.
    pub const fn new(seed: u32, populated: bool) -> Self {
        Self {
            rng: PortraitRng::new(seed),
            populated,
        }
    }

    /// Create a composer for a fingerprint, mixing a fresh seed.
    pub fn for_fingerprint(fingerprint: &SelectionFingerprint, mixer: SeedMixer) -> Self {
        Self::new(mixer.mix(fingerprint), fingerprint.is_populated())
    }

    /// Run all drawing passes and return the finished raster.
    pub fn compose(mut self) -> Raster {
        let mut raster = Raster::portrait();
        let spec = AvatarSpec::resolve(&mut self.rng);

        self.paint_backdrop(&mut raster, &spec);
        let head = self.paint_figure(&mut raster, &spec);
        self.paint_hair(&mut raster, &spec, head);
        self.paint_face(&mut raster, &spec, head);
        self.paint_accessory(&mut raster, &spec, head);
        self.paint_speckle(&mut raster);

        raster
    }

    /// Pass 1: background fill, noise speckle, radial highlight.
    #[allow(clippy::cast_possible_wrap)]
    fn paint_backdrop(&mut self, raster: &mut Raster, spec: &AvatarSpec) {
        raster.fill(spec.background_deep);

        for _ in 0..55 {
            let x = self.rng.next_below(32) as i32;
            let y = self.rng.next_below(32) as i32;
            let tone = if self.rng.next_unit() > 0.55 {
                spec.background_haze
            } else {
                palette::STARLIGHT
            };
            raster.fill_rect(x, y, 1, 1, tone);
        }

        raster.radial_glow(16.0, 10.0, 1.0, 22.0, palette::GLOW, 0.45);
    }

    /// Pass 2 + 3: head block with jitter, neck stub, torso, pants.
    #[allow(clippy::cast_possible_wrap, clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    fn paint_figure(&mut self, raster: &mut Raster, spec: &AvatarSpec) -> HeadBounds {
        let width = 12 + self.rng.next_below(3) as i32;
        let height = 9 + self.rng.next_below(3) as i32;
        let jitter = i32::from(self.rng.next_unit() > 0.85);
        let x = CENTER_X - width / 2 + jitter;
        let y = HEAD_Y;

        // Neck first so the chin edge paints over it.
        raster.fill_rect(CENTER_X - 2, y + height, 4, 2, spec.skin);
        raster.fill_rect(x, y, width as u16, height as u16, spec.skin);

        raster.fill_rect(8, 22, 16, 8, spec.garment);
        raster.fill_rect(9, 27, 14, 2, spec.garment_shadow);
        raster.fill_rect(10, 30, 12, 2, spec.pants);

        // Sleeve highlight bands on slightly more than half of portraits.
        if self.rng.next_unit() > 0.45 {
            raster.fill_rect(6, 22, 2, 7, spec.garment_shadow);
            raster.fill_rect(24, 22, 2, 7, spec.garment_shadow);
        }

        HeadBounds {
            x,
            y,
            width,
            height,
        }
    }

    /// Pass 4: hair layout relative to the head bounds.
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    fn paint_hair(&mut self, raster: &mut Raster, spec: &AvatarSpec, head: HeadBounds) {
        let HeadBounds {
            x,
            y,
            width,
            height,
        } = head;

        match HairStyle::draw(&mut self.rng) {
            HairStyle::Fringed => {
                raster.fill_rect(x - 1, y - 1, (width + 2) as u16, 3, spec.hair);
                raster.fill_rect(x - 1, y + 1, 2, 4, spec.hair);
                raster.fill_rect(x + width - 1, y + 1, 2, 4, spec.hair);
            }
            HairStyle::Tufted => {
                raster.fill_rect(x - 1, y - 1, (width + 2) as u16, 2, spec.hair);
                raster.fill_rect(CENTER_X - 1, y - 2, 2, 2, spec.hair);
            }
            HairStyle::Draped => {
                raster.fill_rect(x - 1, y - 1, (width + 2) as u16, 3, spec.hair);
                raster.fill_rect(x - 2, y + 1, 2, (height - 2) as u16, spec.hair);
                raster.fill_rect(x + width, y + 1, 2, (height - 2) as u16, spec.hair);
            }
            HairStyle::Cropped => {
                raster.fill_rect(x, y - 1, width as u16, 2, spec.hair);
                raster.fill_rect(x + 1, y + 1, (width - 2) as u16, 1, spec.hair);
            }
            HairStyle::Peaked => {
                raster.fill_rect(x - 1, y - 1, (width + 2) as u16, 2, spec.hair);
                raster.fill_rect(CENTER_X - 3, y - 2, 6, 1, spec.hair);
                raster.fill_rect(CENTER_X - 1, y - 3, 2, 1, spec.hair);
            }
        }
    }

    /// Pass 5 + 6: eyes and mouth.
    #[allow(clippy::cast_possible_wrap)]
    fn paint_face(&mut self, raster: &mut Raster, spec: &AvatarSpec, head: HeadBounds) {
        let eye_y = head.y + 3 + self.rng.next_below(2) as i32;
        let offset = ((head.width - 6) / 2).max(2);

        match EyeStyle::draw(&mut self.rng) {
            EyeStyle::Dots => {
                raster.fill_rect(CENTER_X - offset, eye_y, 1, 1, spec.eye);
                raster.fill_rect(CENTER_X + offset, eye_y, 1, 1, spec.eye);
            }
            EyeStyle::Dashes => {
                raster.fill_rect(CENTER_X - offset - 1, eye_y, 2, 1, spec.eye);
                raster.fill_rect(CENTER_X + offset - 1, eye_y, 2, 1, spec.eye);
            }
            EyeStyle::Slits => {
                raster.fill_rect(CENTER_X - offset, eye_y - 1, 1, 2, spec.eye);
                raster.fill_rect(CENTER_X + offset, eye_y - 1, 1, 2, spec.eye);
            }
        }

        let mouth_y = head.y + head.height - 2;
        let color = *self.rng.pick(&palette::MOUTH);
        match MouthStyle::draw(&mut self.rng) {
            MouthStyle::Wide => raster.fill_rect(CENTER_X - 2, mouth_y, 4, 1, color),
            MouthStyle::Small => raster.fill_rect(CENTER_X - 1, mouth_y, 2, 1, color),
            MouthStyle::Parted => {
                raster.fill_rect(CENTER_X - 2, mouth_y, 1, 1, color);
                raster.fill_rect(CENTER_X + 1, mouth_y, 1, 1, color);
            }
        }
    }

    /// Pass 7: accessory on roughly two portraits out of three.
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    fn paint_accessory(&mut self, raster: &mut Raster, spec: &AvatarSpec, head: HeadBounds) {
        if self.rng.next_unit() <= 0.35 {
            return;
        }

        let HeadBounds {
            x,
            y,
            width,
            height,
        } = head;

        match AccessoryStyle::draw(&mut self.rng) {
            AccessoryStyle::Headband => {
                raster.fill_rect(x - 1, y + 3, 4, 2, spec.accessory);
                raster.fill_rect(x + width - 3, y + 3, 4, 2, spec.accessory);
                raster.fill_rect(CENTER_X - 1, y + 4, 2, 1, spec.accessory);
            }
            AccessoryStyle::Collar => {
                raster.fill_rect(CENTER_X - 4, y + height - 1, 8, 1, spec.accessory);
                raster.fill_rect(CENTER_X - 2, y + height, 4, 1, spec.accessory);
            }
            AccessoryStyle::Earrings => {
                raster.fill_rect(x - 2, y + 4, 2, 4, spec.accessory);
                raster.fill_rect(x + width, y + 4, 2, 4, spec.accessory);
                raster.fill_rect(x - 1, y + 5, (width + 2) as u16, 1, spec.accessory);
            }
            AccessoryStyle::Brim => {
                raster.fill_rect(x, y - 2, width as u16, 1, spec.accessory);
                raster.fill_rect(x + 1, y - 3, (width - 2) as u16, 1, spec.accessory);
            }
        }
    }

    /// Pass 8: foreground speckle across the torso band.
    ///
    /// Denser when a populated fingerprint seeded the portrait.
    #[allow(clippy::cast_possible_wrap)]
    fn paint_speckle(&mut self, raster: &mut Raster) {
        let count = if self.populated { 9 } else { 5 };
        for _ in 0..count {
            let x = self.rng.next_below(32) as i32;
            let y = (self.rng.next_below(9) + 22) as i32;
            let color = *self.rng.pick(&palette::SPECKLE);
            raster.fill_rect(x, y, 1, 1, color);
        }
    }
}

/// Compose a portrait for a fingerprint with a freshly mixed seed.
pub fn portray(fingerprint: &SelectionFingerprint) -> Raster {
    AvatarComposer::for_fingerprint(fingerprint, SeedMixer).compose()
}
