// SPDX-License-Identifier: MIT
//
// Colormaps — named gradients sampled for the colorbar display.
//
// Each map is a short list of hex anchor colors; sampling interpolates
// linearly between adjacent anchors in RGB. The anchor tables are
// vendored snapshots of the standard palettes (the viridis family and
// the ColorBrewer sets), grouped the way the colorbar listing prints
// them.

use mpl_color::Color;

// ─── Colormap ────────────────────────────────────────────────────────────────

/// A named gradient defined by hex anchor colors.
#[derive(Debug, Clone, Copy)]
pub struct Colormap {
    name: &'static str,
    anchors: &'static [&'static str],
}

impl Colormap {
    #[must_use]
    pub const fn new(name: &'static str, anchors: &'static [&'static str]) -> Self {
        Self { name, anchors }
    }

    /// The colormap's display name.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        self.name
    }

    /// Sample the gradient at `t` in `[0, 1]` (clamped).
    ///
    /// `t = 0` is exactly the first anchor, `t = 1` exactly the last;
    /// in between, adjacent anchors are interpolated per-channel in RGB.
    #[must_use]
    pub fn sample(&self, t: f32) -> Color {
        let t = t.clamp(0.0, 1.0);
        let n = self.anchors.len();
        if n == 1 {
            return anchor_color(self.anchors[0]);
        }

        #[allow(clippy::cast_precision_loss, clippy::cast_possible_truncation, clippy::cast_sign_loss)]
        let (idx, frac) = {
            let pos = t * (n - 1) as f32;
            let idx = (pos.floor() as usize).min(n - 2);
            (idx, pos - idx as f32)
        };

        lerp(
            anchor_color(self.anchors[idx]),
            anchor_color(self.anchors[idx + 1]),
            frac,
        )
    }

    /// Sample `count` evenly spaced colors across the gradient.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn ramp(&self, count: usize) -> Vec<Color> {
        match count {
            0 => Vec::new(),
            1 => vec![self.sample(0.0)],
            _ => (0..count)
                .map(|i| self.sample(i as f32 / (count - 1) as f32))
                .collect(),
        }
    }
}

/// Parse an anchor hex string. The anchors are compile-time data; a bad
/// one is a table bug, so fall back to black rather than propagating.
fn anchor_color(hex: &str) -> Color {
    Color::hex(hex).unwrap_or_default()
}

/// Per-channel linear interpolation in RGB.
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn lerp(a: Color, b: Color, t: f32) -> Color {
    let mix = |x: u8, y: u8| -> u8 {
        (f32::from(y) - f32::from(x))
            .mul_add(t, f32::from(x))
            .round()
            .clamp(0.0, 255.0) as u8
    };
    Color::rgb(mix(a.r, b.r), mix(a.g, b.g), mix(a.b, b.b))
}

// ─── Groups ──────────────────────────────────────────────────────────────────

/// A titled category of colormaps, as printed by the colorbar listing.
#[derive(Debug, Clone, Copy)]
pub struct ColormapGroup {
    pub title: &'static str,
    pub maps: &'static [Colormap],
}

/// The built-in colormap categories, in display order.
#[must_use]
pub const fn groups() -> &'static [ColormapGroup] {
    GROUPS
}

/// Look up a colormap by name, case-insensitive.
#[must_use]
pub fn find(name: &str) -> Option<&'static Colormap> {
    GROUPS
        .iter()
        .flat_map(|g| g.maps.iter())
        .find(|m| m.name.eq_ignore_ascii_case(name))
}

const GROUPS: &[ColormapGroup] = &[
    ColormapGroup {
        title: "Perceptually Uniform Sequential",
        maps: &[
            Colormap::new("viridis", VIRIDIS),
            Colormap::new("plasma", PLASMA),
            Colormap::new("inferno", INFERNO),
            Colormap::new("magma", MAGMA),
            Colormap::new("cividis", CIVIDIS),
        ],
    },
    ColormapGroup {
        title: "Sequential",
        maps: &[
            Colormap::new("Blues", BLUES),
            Colormap::new("Greens", GREENS),
            Colormap::new("Oranges", ORANGES),
            Colormap::new("Reds", REDS),
            Colormap::new("Purples", PURPLES),
        ],
    },
    ColormapGroup {
        title: "Diverging",
        maps: &[
            Colormap::new("PiYG", PIYG),
            Colormap::new("PRGn", PRGN),
            Colormap::new("BrBG", BRBG),
            Colormap::new("RdBu", RDBU),
            Colormap::new("RdYlBu", RDYLBU),
            Colormap::new("RdYlGn", RDYLGN),
            Colormap::new("Spectral", SPECTRAL),
        ],
    },
    ColormapGroup {
        title: "Qualitative",
        maps: &[
            Colormap::new("Pastel1", PASTEL1),
            Colormap::new("Pastel2", PASTEL2),
            Colormap::new("Paired", PAIRED),
            Colormap::new("Accent", ACCENT),
            Colormap::new("Dark2", DARK2),
            Colormap::new("Set1", SET1),
            Colormap::new("Set2", SET2),
            Colormap::new("Set3", SET3),
            Colormap::new("tab10", TAB10),
        ],
    },
];

// ─── Anchor Data ─────────────────────────────────────────────────────────────

const VIRIDIS: &[&str] = &[
    "#440154", "#482878", "#3e4a89", "#31688e", "#26828e",
    "#1f9e89", "#35b779", "#6ece58", "#b5de2b", "#fde725",
];

const PLASMA: &[&str] = &[
    "#0d0887", "#46039f", "#7201a8", "#9c179e", "#bd3786",
    "#d8576b", "#ed7953", "#fb9f3a", "#fdca26", "#f0f921",
];

const INFERNO: &[&str] = &[
    "#000004", "#1b0c41", "#4a0c6b", "#781c6d", "#a52c60",
    "#cf4446", "#ed6925", "#fb9b06", "#f7d13d", "#fcffa4",
];

const MAGMA: &[&str] = &[
    "#000004", "#180f3d", "#440f76", "#721f81", "#9e2f7f",
    "#cd4071", "#f1605d", "#fd9668", "#feca8d", "#fcfdbf",
];

const CIVIDIS: &[&str] = &[
    "#00224e", "#123570", "#3b496c", "#575d6d", "#707173",
    "#8a8678", "#a59c74", "#c3b369", "#e1cc55", "#fdea45",
];

const BLUES: &[&str] = &[
    "#f7fbff", "#deebf7", "#c6dbef", "#9ecae1", "#6baed6",
    "#4292c6", "#2171b5", "#08519c", "#08306b",
];

const GREENS: &[&str] = &[
    "#f7fcf5", "#e5f5e0", "#c7e9c0", "#a1d99b", "#74c476",
    "#41ab5d", "#238b45", "#006d2c", "#00441b",
];

const ORANGES: &[&str] = &[
    "#fff5eb", "#fee6ce", "#fdd0a2", "#fdae6b", "#fd8d3c",
    "#f16913", "#d94801", "#a63603", "#7f2704",
];

const REDS: &[&str] = &[
    "#fff5f0", "#fee0d2", "#fcbba1", "#fc9272", "#fb6a4a",
    "#ef3b2c", "#cb181d", "#a50f15", "#67000d",
];

const PURPLES: &[&str] = &[
    "#fcfbfd", "#efedf5", "#dadaeb", "#bcbddc", "#9e9ac8",
    "#807dba", "#6a51a3", "#54278f", "#3f007d",
];

const RDBU: &[&str] = &[
    "#67001f", "#b2182b", "#d6604d", "#f4a582", "#fddbc7",
    "#f7f7f7", "#d1e5f0", "#92c5de", "#4393c3", "#2166ac", "#053061",
];

const RDYLBU: &[&str] = &[
    "#a50026", "#d73027", "#f46d43", "#fdae61", "#fee090",
    "#ffffbf", "#e0f3f8", "#abd9e9", "#74add1", "#4575b4", "#313695",
];

const RDYLGN: &[&str] = &[
    "#a50026", "#d73027", "#f46d43", "#fdae61", "#fee08b",
    "#ffffbf", "#d9ef8b", "#a6d96a", "#66bd63", "#1a9850", "#006837",
];

const SPECTRAL: &[&str] = &[
    "#9e0142", "#d53e4f", "#f46d43", "#fdae61", "#fee08b",
    "#ffffbf", "#e6f598", "#abdda4", "#66c2a5", "#3288bd", "#5e4fa2",
];

const BRBG: &[&str] = &[
    "#543005", "#8c510a", "#bf812d", "#dfc27d", "#f6e8c3",
    "#f5f5f5", "#c7eae5", "#80cdc1", "#35978f", "#01665e", "#003c30",
];

const PRGN: &[&str] = &[
    "#40004b", "#762a83", "#9970ab", "#c2a5cf", "#e7d4e8",
    "#f7f7f7", "#d9f0d3", "#a6dba0", "#5aae61", "#1b7837", "#00441b",
];

const PIYG: &[&str] = &[
    "#8e0152", "#c51b7d", "#de77ae", "#f1b6da", "#fde0ef",
    "#f7f7f7", "#e6f5d0", "#b8e186", "#7fbc41", "#4d9221", "#276419",
];

const PASTEL1: &[&str] = &[
    "#fbb4ae", "#b3cde3", "#ccebc5", "#decbe4", "#fed9a6",
    "#ffffcc", "#e5d8bd", "#fddaec", "#f2f2f2",
];

const PASTEL2: &[&str] = &[
    "#b3e2cd", "#fdcdac", "#cbd5e8", "#f4cae4", "#e6f5c9",
    "#fff2ae", "#f1e2cc", "#cccccc",
];

const PAIRED: &[&str] = &[
    "#a6cee3", "#1f78b4", "#b2df8a", "#33a02c", "#fb9a99",
    "#e31a1c", "#fdbf6f", "#ff7f00", "#cab2d6", "#6a3d9a",
    "#ffff99", "#b15928",
];

const ACCENT: &[&str] = &[
    "#7fc97f", "#beaed4", "#fdc086", "#ffff99", "#386cb0",
    "#f0027f", "#bf5b17", "#666666",
];

const DARK2: &[&str] = &[
    "#1b9e77", "#d95f02", "#7570b3", "#e7298a", "#66a61e",
    "#e6ab02", "#a6761d", "#666666",
];

const SET1: &[&str] = &[
    "#e41a1c", "#377eb8", "#4daf4a", "#984ea3", "#ff7f00",
    "#ffff33", "#a65628", "#f781bf", "#999999",
];

const SET2: &[&str] = &[
    "#66c2a5", "#fc8d62", "#8da0cb", "#e78ac3", "#a6d854",
    "#ffd92f", "#e5c494", "#b3b3b3",
];

const SET3: &[&str] = &[
    "#8dd3c7", "#ffffb3", "#bebada", "#fb8072", "#80b1d3",
    "#fdb462", "#b3de69", "#fccde5", "#d9d9d9", "#bc80bd",
    "#ccebc5", "#ffed6f",
];

const TAB10: &[&str] = &[
    "#1f77b4", "#ff7f0e", "#2ca02c", "#d62728", "#9467bd",
    "#8c564b", "#e377c2", "#7f7f7f", "#bcbd22", "#17becf",
];

// ─── Tests ───────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn sample_endpoints_hit_the_anchors() {
        let viridis = find("viridis").unwrap();
        assert_eq!(viridis.sample(0.0), Color::hex("#440154").unwrap());
        assert_eq!(viridis.sample(1.0), Color::hex("#fde725").unwrap());
    }

    #[test]
    fn sample_clamps_out_of_range() {
        let viridis = find("viridis").unwrap();
        assert_eq!(viridis.sample(-1.0), viridis.sample(0.0));
        assert_eq!(viridis.sample(2.0), viridis.sample(1.0));
    }

    #[test]
    fn sample_midpoint_between_two_anchors() {
        let map = Colormap::new("bw", &["#000000", "#ffffff"]);
        assert_eq!(map.sample(0.5), Color::rgb(128, 128, 128));
    }

    #[test]
    fn single_anchor_map_is_constant() {
        let map = Colormap::new("solid", &["#12ab84"]);
        assert_eq!(map.sample(0.0), map.sample(0.7));
    }

    #[test]
    fn ramp_counts() {
        let viridis = find("viridis").unwrap();
        assert!(viridis.ramp(0).is_empty());
        assert_eq!(viridis.ramp(1).len(), 1);
        let ramp = viridis.ramp(64);
        assert_eq!(ramp.len(), 64);
        assert_eq!(ramp[0], viridis.sample(0.0));
        assert_eq!(*ramp.last().unwrap(), viridis.sample(1.0));
    }

    #[test]
    fn find_is_case_insensitive() {
        assert!(find("VIRIDIS").is_some());
        assert!(find("rdbu").is_some());
        assert!(find("nope").is_none());
    }

    #[test]
    fn groups_are_populated_and_parseable() {
        assert_eq!(groups().len(), 4);
        for group in groups() {
            assert!(!group.maps.is_empty());
            for map in group.maps {
                for hex in map.anchors {
                    assert!(Color::hex(hex).is_ok(), "bad anchor {hex} in {}", map.name());
                }
            }
        }
    }

    #[test]
    fn gradient_is_monotone_for_blues() {
        // "Blues" runs light → dark; the blue channel's brightness sum
        // should never increase along the ramp.
        let blues = find("Blues").unwrap();
        let ramp = blues.ramp(32);
        let mut prev = u16::MAX;
        for color in ramp {
            let sum = u16::from(color.r) + u16::from(color.g) + u16::from(color.b);
            assert!(sum <= prev, "Blues ramp brightened");
            prev = sum;
        }
    }
}
