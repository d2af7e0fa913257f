use image::{GrayImage, Luma};

use crate::common::{
    mask::MaskPattern,
    metadata::{ECLevel, Metadata, Version},
};

#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum Module {
    Dark,
    Light,
}

impl Module {
    pub fn is_dark(self) -> bool {
        matches!(self, Module::Dark)
    }

    pub fn select<T>(self, dark: T, light: T) -> T {
        match self {
            Module::Dark => dark,
            Module::Light => light,
        }
    }
}

impl From<bool> for Module {
    fn from(dark: bool) -> Self {
        if dark {
            Module::Dark
        } else {
            Module::Light
        }
    }
}

#[derive(Debug, Clone)]
pub struct QR {
    grid: Box<[Module]>,
    w: usize,
    ver: Version,
    ecl: ECLevel,
    mask: MaskPattern,
}

// QR type for builder
//------------------------------------------------------------------------------

impl QR {
    pub(crate) fn from_qrcodegen(code: &qrcodegen::QrCode) -> Self {
        let ver = Version::from(code.version());
        let w = ver.width();
        debug_assert_eq!(w, code.size() as usize, "Width mismatch between version and symbol");

        let grid = (0..w as i32)
            .flat_map(|r| (0..w as i32).map(move |c| (r, c)))
            .map(|(r, c)| Module::from(code.get_module(c, r)))
            .collect();

        Self {
            grid,
            w,
            ver,
            ecl: code.error_correction_level().into(),
            mask: code.mask().into(),
        }
    }

    pub fn grid(&self) -> &[Module] {
        &self.grid
    }

    pub fn version(&self) -> Version {
        self.ver
    }

    pub fn width(&self) -> usize {
        self.w
    }

    pub fn ec_level(&self) -> ECLevel {
        self.ecl
    }

    pub fn mask(&self) -> MaskPattern {
        self.mask
    }

    pub fn metadata(&self) -> Metadata {
        Metadata::new(self.ver, self.ecl, self.mask)
    }

    pub fn count_dark_modules(&self) -> usize {
        self.grid.iter().filter(|m| m.is_dark()).count()
    }

    fn coord_to_index(&self, r: i16, c: i16) -> usize {
        let w = self.w as i16;
        debug_assert!(-w <= r && r < w, "row should be greater than or equal to w");
        debug_assert!(-w <= c && c < w, "column should be greater than or equal to w");

        let r = if r < 0 { r + w } else { r };
        let c = if c < 0 { c + w } else { c };
        (r * w + c) as _
    }

    pub fn get(&self, r: i16, c: i16) -> Module {
        self.grid[self.coord_to_index(r, c)]
    }
}


// Render
//------------------------------------------------------------------------------

impl QR {
    pub fn render(&self, module_sz: u32, quiet_zone: u32) -> GrayImage {
        debug_assert!(module_sz > 0, "Module size must be positive");

        let qz_sz = quiet_zone * module_sz;
        let qr_sz = self.w as u32 * module_sz;
        let total_sz = qz_sz + qr_sz + qz_sz;

        GrayImage::from_fn(total_sz, total_sz, |j, i| {
            if i < qz_sz || i >= qz_sz + qr_sz || j < qz_sz || j >= qz_sz + qr_sz {
                return Luma([255]);
            }
            let r = (i - qz_sz) / module_sz;
            let c = (j - qz_sz) / module_sz;
            self.get(r as i16, c as i16).select(Luma([0]), Luma([255]))
        })
    }

    pub fn to_str(&self, quiet_zone: usize) -> String {
        let qr_end = quiet_zone + self.w;
        let total_sz = qr_end + quiet_zone;

        let mut canvas = String::with_capacity(total_sz * (total_sz + 1) * 3);
        for i in 0..total_sz {
            for j in 0..total_sz {
                if i < quiet_zone || i >= qr_end || j < quiet_zone || j >= qr_end {
                    canvas.push('█');
                    continue;
                }
                let r = (i - quiet_zone) as i16;
                let c = (j - quiet_zone) as i16;
                canvas.push(self.get(r, c).select(' ', '█'));
            }
            canvas.push('\n');
        }

        canvas
    }
}
