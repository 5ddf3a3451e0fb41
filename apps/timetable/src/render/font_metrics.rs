//! Static font-metric tables for the three Helvetica faces used by the report.
//!
//! Widths are in em units (relative to font size), taken from the standard Adobe AFM
//! files for the PDF base-14 fonts. Because the document embeds no font program, the
//! viewer renders with these exact metrics, so wrapping computed here matches the page.
//!
//! All tables cover ASCII 0x20..=0x7E (95 printable characters).
//! Index = (char as usize) - 32.

use serde::{Deserialize, Serialize};

// ────────────────────────────────────────────────────────────────────────────
// Faces
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Face {
    Regular,
    Bold,
    Oblique,
}

impl Face {
    pub const ALL: [Face; 3] = [Face::Regular, Face::Bold, Face::Oblique];

    /// PDF base-14 font name.
    pub fn base_font(&self) -> &'static str {
        match self {
            Face::Regular => "Helvetica",
            Face::Bold => "Helvetica-Bold",
            Face::Oblique => "Helvetica-Oblique",
        }
    }

    /// Name of the font in the page resource dictionary.
    pub fn resource_name(&self) -> &'static str {
        match self {
            Face::Regular => "F1",
            Face::Bold => "F2",
            Face::Oblique => "F3",
        }
    }
}

/// Line advance as a multiple of font size.
pub const LINE_HEIGHT_FACTOR: f32 = 1.2;

pub fn line_height(size: f32) -> f32 {
    size * LINE_HEIGHT_FACTOR
}

// ────────────────────────────────────────────────────────────────────────────
// Font metric table
// ────────────────────────────────────────────────────────────────────────────

/// Static character-width table for a face.
///
/// Width array slot layout:
/// ```text
/// [0]=sp  [1]=!   [2]="   [3]=#   [4]=$   [5]=%   [6]=&   [7]='
/// [8]=(   [9]=)   [10]=*  [11]=+  [12]=,  [13]=-  [14]=.  [15]=/
/// [16..25]=0-9
/// [26]=:  [27]=;  [28]=<  [29]==  [30]=>  [31]=?  [32]=@
/// [33..58]=A-Z
/// [59]=[  [60]=\  [61]=]  [62]=^  [63]=_  [64]=`
/// [65..90]=a-z
/// [91]={  [92]=|  [93]=}  [94]=~
/// ```
pub struct FontMetricTable {
    pub face: Face,
    widths: [f32; 95],
    /// Fallback width for characters outside the table.
    pub average_char_width: f32,
    pub bullet_width: f32,
    pub space_width: f32,
    /// Distance from the top of the line box to the baseline.
    pub ascent: f32,
}

impl FontMetricTable {
    /// Measures a string in em units.
    pub fn measure_str(&self, s: &str) -> f32 {
        s.chars()
            .map(|c| {
                let code = c as usize;
                if (32..=126).contains(&code) {
                    self.widths[code - 32]
                } else if c == '•' {
                    self.bullet_width
                } else {
                    self.average_char_width
                }
            })
            .sum()
    }

    /// Measures a string in points at `size`.
    pub fn width_pt(&self, s: &str, size: f32) -> f32 {
        self.measure_str(s) * size
    }

    /// Greedy word wrap into lines no wider than `max_width_pt`.
    ///
    /// A single word wider than the line is placed on its own line and left to overflow.
    /// Empty or whitespace-only input yields no lines.
    pub fn wrap_lines(&self, s: &str, max_width_pt: f32, size: f32) -> Vec<String> {
        let max_width = max_width_pt / size;
        let mut lines = Vec::new();
        let mut current = String::new();
        let mut current_width = 0.0_f32;

        for word in s.split_whitespace() {
            let word_w = self.measure_str(word);
            if current.is_empty() {
                current.push_str(word);
                current_width = word_w;
            } else if current_width + self.space_width + word_w > max_width {
                lines.push(std::mem::take(&mut current));
                current.push_str(word);
                current_width = word_w;
            } else {
                current.push(' ');
                current.push_str(word);
                current_width += self.space_width + word_w;
            }
        }
        if !current.is_empty() {
            lines.push(current);
        }
        lines
    }

    /// Truncates `s` with a trailing "..." so it fits in `max_width_pt`.
    pub fn fit_to_width(&self, s: &str, max_width_pt: f32, size: f32) -> String {
        if self.width_pt(s, size) <= max_width_pt {
            return s.to_string();
        }
        let ellipsis = "...";
        let budget = max_width_pt / size - self.measure_str(ellipsis);
        let mut out = String::new();
        let mut width = 0.0_f32;
        for c in s.chars() {
            let w = self.measure_str(c.encode_utf8(&mut [0u8; 4]));
            if width + w > budget {
                break;
            }
            width += w;
            out.push(c);
        }
        format!("{}{ellipsis}", out.trim_end())
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Static width tables  (95 ASCII printable characters each)
// ────────────────────────────────────────────────────────────────────────────

/// Helvetica. Helvetica-Oblique shares these widths.
#[rustfmt::skip]
const HELVETICA_WIDTHS: [f32; 95] = [
    // sp     !      "      #      $      %      &      '      (      )      *      +      ,      -      .      /
    0.278, 0.278, 0.355, 0.556, 0.556, 0.889, 0.667, 0.191, 0.333, 0.333, 0.389, 0.584, 0.278, 0.333, 0.278, 0.278,
    // 0      1      2      3      4      5      6      7      8      9
    0.556, 0.556, 0.556, 0.556, 0.556, 0.556, 0.556, 0.556, 0.556, 0.556,
    // :      ;      <      =      >      ?      @
    0.278, 0.278, 0.584, 0.584, 0.584, 0.556, 1.015,
    // A      B      C      D      E      F      G      H      I      J      K      L      M
    0.667, 0.667, 0.722, 0.722, 0.667, 0.611, 0.778, 0.722, 0.278, 0.500, 0.667, 0.556, 0.833,
    // N      O      P      Q      R      S      T      U      V      W      X      Y      Z
    0.722, 0.778, 0.667, 0.778, 0.722, 0.667, 0.611, 0.722, 0.667, 0.944, 0.667, 0.667, 0.611,
    // [      \      ]      ^      _      `
    0.278, 0.278, 0.278, 0.469, 0.556, 0.333,
    // a      b      c      d      e      f      g      h      i      j      k      l      m
    0.556, 0.556, 0.500, 0.556, 0.556, 0.278, 0.556, 0.556, 0.222, 0.222, 0.500, 0.222, 0.833,
    // n      o      p      q      r      s      t      u      v      w      x      y      z
    0.556, 0.556, 0.556, 0.556, 0.333, 0.500, 0.278, 0.556, 0.500, 0.722, 0.500, 0.500, 0.500,
    // {      |      }      ~
    0.334, 0.260, 0.334, 0.584,
];

static HELVETICA_TABLE: FontMetricTable = FontMetricTable {
    face: Face::Regular,
    widths: HELVETICA_WIDTHS,
    average_char_width: 0.556,
    bullet_width: 0.350,
    space_width: 0.278,
    ascent: 0.718,
};

static HELVETICA_OBLIQUE_TABLE: FontMetricTable = FontMetricTable {
    face: Face::Oblique,
    widths: HELVETICA_WIDTHS,
    average_char_width: 0.556,
    bullet_width: 0.350,
    space_width: 0.278,
    ascent: 0.718,
};

static HELVETICA_BOLD_TABLE: FontMetricTable = FontMetricTable {
    face: Face::Bold,
    #[rustfmt::skip]
    widths: [
        // sp     !      "      #      $      %      &      '      (      )      *      +      ,      -      .      /
        0.278, 0.333, 0.474, 0.556, 0.556, 0.889, 0.722, 0.238, 0.333, 0.333, 0.389, 0.584, 0.278, 0.333, 0.278, 0.278,
        // 0      1      2      3      4      5      6      7      8      9
        0.556, 0.556, 0.556, 0.556, 0.556, 0.556, 0.556, 0.556, 0.556, 0.556,
        // :      ;      <      =      >      ?      @
        0.333, 0.333, 0.584, 0.584, 0.584, 0.611, 0.975,
        // A      B      C      D      E      F      G      H      I      J      K      L      M
        0.722, 0.722, 0.722, 0.722, 0.667, 0.611, 0.778, 0.722, 0.278, 0.556, 0.722, 0.611, 0.833,
        // N      O      P      Q      R      S      T      U      V      W      X      Y      Z
        0.722, 0.778, 0.667, 0.778, 0.722, 0.667, 0.611, 0.722, 0.667, 0.944, 0.667, 0.667, 0.611,
        // [      \      ]      ^      _      `
        0.333, 0.278, 0.333, 0.584, 0.556, 0.333,
        // a      b      c      d      e      f      g      h      i      j      k      l      m
        0.556, 0.611, 0.556, 0.611, 0.556, 0.333, 0.611, 0.611, 0.278, 0.278, 0.556, 0.278, 0.889,
        // n      o      p      q      r      s      t      u      v      w      x      y      z
        0.611, 0.611, 0.611, 0.611, 0.389, 0.556, 0.333, 0.611, 0.556, 0.778, 0.556, 0.556, 0.500,
        // {      |      }      ~
        0.389, 0.280, 0.389, 0.584,
    ],
    average_char_width: 0.611,
    bullet_width: 0.350,
    space_width: 0.278,
    ascent: 0.718,
};

/// Returns the static metric table for a face.
pub fn get_metrics(face: &Face) -> &'static FontMetricTable {
    match face {
        Face::Regular => &HELVETICA_TABLE,
        Face::Bold => &HELVETICA_BOLD_TABLE,
        Face::Oblique => &HELVETICA_OBLIQUE_TABLE,
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_measure_str_empty_returns_zero() {
        assert_eq!(get_metrics(&Face::Regular).measure_str(""), 0.0);
    }

    #[test]
    fn test_measure_str_ascii_characters() {
        let metrics = get_metrics(&Face::Regular);
        // "Skin" = S(0.667) + k(0.500) + i(0.222) + n(0.556) = 1.945
        let width = metrics.measure_str("Skin");
        assert!((width - 1.945).abs() < 1e-3, "got {width}");
    }

    #[test]
    fn test_bold_is_wider_than_regular() {
        let text = "Dubois Hydrating Ceramide Cleanser";
        assert!(
            get_metrics(&Face::Bold).measure_str(text) > get_metrics(&Face::Regular).measure_str(text)
        );
    }

    #[test]
    fn test_non_ascii_falls_back_to_average() {
        let metrics = get_metrics(&Face::Regular);
        assert!((metrics.measure_str("é") - metrics.average_char_width).abs() < 1e-4);
        assert!((metrics.measure_str("•") - metrics.bullet_width).abs() < 1e-4);
    }

    #[test]
    fn test_width_pt_scales_with_size() {
        let metrics = get_metrics(&Face::Regular);
        let w10 = metrics.width_pt("Toner", 10.0);
        let w20 = metrics.width_pt("Toner", 20.0);
        assert!((w20 - 2.0 * w10).abs() < 1e-3);
    }

    #[test]
    fn test_wrap_short_text_is_one_line() {
        let lines = get_metrics(&Face::Regular).wrap_lines("Gentle cleansing", 470.0, 10.0);
        assert_eq!(lines, vec!["Gentle cleansing".to_string()]);
    }

    #[test]
    fn test_wrap_long_text_respects_width() {
        let metrics = get_metrics(&Face::Regular);
        let text = "Advanced oil-control formula that deeply cleanses pores and regulates sebum \
                    production while keeping the barrier comfortable through the whole day";
        let lines = metrics.wrap_lines(text, 200.0, 9.0);
        assert!(lines.len() >= 2, "expected wrap, got {lines:?}");
        for line in &lines {
            assert!(metrics.width_pt(line, 9.0) <= 200.0 + 1e-3, "line too wide: {line}");
        }
        assert_eq!(lines.join(" "), text.split_whitespace().collect::<Vec<_>>().join(" "));
    }

    #[test]
    fn test_wrap_whitespace_only_yields_nothing() {
        assert!(get_metrics(&Face::Regular).wrap_lines("   ", 100.0, 10.0).is_empty());
    }

    #[test]
    fn test_fit_to_width_truncates_with_ellipsis() {
        let metrics = get_metrics(&Face::Regular);
        let text = "Double Cleanse, Exfoliation Treatment, Recovery Serum, Overnight Mask, Facial Oil";
        let fitted = metrics.fit_to_width(text, 120.0, 10.0);
        assert!(fitted.ends_with("..."));
        assert!(metrics.width_pt(&fitted, 10.0) <= 120.0 + 1e-3);
        assert_eq!(metrics.fit_to_width("Short", 120.0, 10.0), "Short");
    }

    #[test]
    fn test_faces_have_distinct_resource_names() {
        let names: std::collections::HashSet<_> =
            Face::ALL.iter().map(|f| f.resource_name()).collect();
        assert_eq!(names.len(), 3);
    }
}
