//! The two built-in icon templates
//!
//! Both draw the same mark: a near-black rounded square with an orange
//! bold monospace `>_` prompt. The simplified one is tuned for 16 and 32
//! pixel favicons, the detailed one for touch and app icons.

const SIMPLIFIED_SVG: &str = r##"<svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 32 32">
  <rect width="32" height="32" rx="6" fill="#0C0C0E"/>
  <text x="4" y="22" font-family="monospace" font-size="14" font-weight="bold" fill="#FF5722">&gt;_</text>
</svg>"##;

const DETAILED_SVG: &str = r##"<svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 512 512">
  <rect width="512" height="512" rx="96" fill="#0C0C0E"/>
  <text x="70" y="345" font-family="monospace" font-size="224" font-weight="bold" fill="#FF5722">&gt;_</text>
</svg>"##;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Template {
    /// 32x32 view box, used for the favicon sizes
    Simplified,
    /// 512x512 view box, used for touch and app icons
    Detailed,
}

impl Template {
    /// SVG markup for this template
    pub fn markup(self) -> &'static str {
        match self {
            Template::Simplified => SIMPLIFIED_SVG,
            Template::Detailed => DETAILED_SVG,
        }
    }
}
