use crate::calculator::{Calculator, Report};
use crate::error::ParseError;
use crate::keytag::Keytag;
use crate::layout::Layout;

use std::str::FromStr;

const START_Y: i32 = 30;
const LINE_HEIGHT: i32 = 20;
const LEFT_PADDING: f32 = 15.0;
const RIGHT_PADDING: f32 = 30.0;
const CHAR_WIDTH: f32 = 9.6;
const MIN_TEXT_CHARS: usize = 50;

const TAG_WIDTH: f32 = 56.0;
const TAG_HEIGHT: f32 = 96.0;
const TAG_GAP: f32 = 10.0;
const RING_RADIUS: f32 = 9.0;
const TAGS_PER_ROW: usize = 5;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Theme {
    #[default]
    Dark,
    Light,
}

pub struct ThemeColors {
    pub bg: &'static str,
    pub text: &'static str,
    pub key: &'static str,
    pub value: &'static str,
    pub cc: &'static str,
}

impl Theme {
    pub fn colors(self) -> ThemeColors {
        match self {
            Theme::Dark => ThemeColors {
                bg: "#161b22",
                text: "#c9d1d9",
                key: "#ffa657",
                value: "#a5d6ff",
                cc: "#616e7f",
            },
            Theme::Light => ThemeColors {
                bg: "#ffffff",
                text: "#24292f",
                key: "#d73a49",
                value: "#0366d6",
                cc: "#6a737d",
            },
        }
    }
}

impl FromStr for Theme {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "dark" => Ok(Theme::Dark),
            "light" => Ok(Theme::Light),
            other => Err(ParseError::UnknownTheme(other.to_owned())),
        }
    }
}

// Utilities for building SVG content

fn escape_xml(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}

pub fn build_stat_row(key: &str, value: &str, align_width: usize) -> (String, String, String) {
    let key_part = format!("{key}: ");
    let base_len = key_part.len() + value.len();
    let available = align_width.saturating_sub(base_len);

    let dots = match available {
        0 => "".to_string(),
        1 => " ".to_string(),
        2 => ". ".to_string(),
        n => ".".repeat(n),
    };

    (key_part, dots, value.to_string())
}

fn build_header_line(label: &str, align_width: usize) -> String {
    let base = format!("{label} ");
    let dash_count = align_width.saturating_sub(base.len()) + 2;
    format!("{base}{}", "-".repeat(dash_count))
}

enum Line {
    Header(String),
    Text(String),
    Stat { k: String, d: String, v: String },
}

// Builds the text block and returns (tspans, width, height)

fn build_text_column(calc: &Calculator, report: &Report) -> (String, f32, f32) {
    let messages = calc.messages();
    let date = report.clean_date;
    let date_value = match messages.month_name(date.month) {
        Some(month) => format!("{month} {}, {}", date.day, date.year),
        None => date.to_string(),
    };

    let mut lines = vec![Line::Header(messages.section_title.to_string())];
    let mut rows: Vec<(&str, String)> = vec![(messages.prompt, date_value)];
    if report.valid {
        rows.push(("Total days", report.span.total_days.to_string()));
        rows.push(("Total months", report.total_months.to_string()));
    }

    let align_width = rows
        .iter()
        .map(|(k, v)| k.len() + 2 + v.len())
        .chain([report.days_blurb.len()])
        .chain(report.main_blurb.iter().map(String::len))
        .max()
        .unwrap_or(0)
        .max(MIN_TEXT_CHARS);

    for (key, value) in &rows {
        let (k, d, v) = build_stat_row(key, value, align_width);
        lines.push(Line::Stat { k, d, v });
    }
    lines.push(Line::Text(report.days_blurb.clone()));
    if let Some(main) = &report.main_blurb {
        lines.push(Line::Text(main.clone()));
    }

    let mut tspans = String::new();
    for (i, line) in lines.iter().enumerate() {
        let y = START_Y + (i as i32) * LINE_HEIGHT;
        match line {
            Line::Header(text) => {
                tspans.push_str(&format!(
                    r#"<tspan x="{LEFT_PADDING}" y="{y}">{}</tspan>
"#,
                    escape_xml(&build_header_line(text, align_width))
                ));
            }
            Line::Text(text) => {
                tspans.push_str(&format!(
                    r#"<tspan x="{LEFT_PADDING}" y="{y}" class="value">{}</tspan>
"#,
                    escape_xml(text)
                ));
            }
            Line::Stat { k, d, v } => {
                tspans.push_str(&format!(
                    r#"<tspan x="{LEFT_PADDING}" y="{y}" class="cc">. </tspan>
<tspan class="key">{}</tspan><tspan class="cc">{}</tspan><tspan class="value">{}</tspan>
"#,
                    escape_xml(k),
                    escape_xml(d),
                    escape_xml(v)
                ));
            }
        }
    }

    let width = LEFT_PADDING + (align_width as f32 + 2.0) * CHAR_WIDTH + RIGHT_PADDING;
    let height = lines.len() as f32 * LINE_HEIGHT as f32 + START_Y as f32;
    (tspans, width, height)
}

fn build_keytag(tag: Keytag, href: &str, x: f32, y: f32, layout: Layout) -> String {
    let cx = x + TAG_WIDTH / 2.0;
    let ring_y = y + RING_RADIUS + 2.0;
    let label_y = y + TAG_HEIGHT / 2.0 + 6.0;
    let ring = if tag.closed_ring(layout) {
        format!(r#"<circle cx="{cx}" cy="{ring_y}" r="{RING_RADIUS}" class="ring"/>"#)
    } else {
        format!(
            r#"<path d="M {l} {ring_y} A {RING_RADIUS} {RING_RADIUS} 0 0 0 {r} {ring_y}" class="ring"/>"#,
            l = cx - RING_RADIUS,
            r = cx + RING_RADIUS
        )
    };

    format!(
        r#"<g class="keytag" data-tag="{token}">
<rect x="{x}" y="{y}" width="{TAG_WIDTH}" height="{TAG_HEIGHT}" rx="10" fill="{fill}" stroke="{stroke}"/>
<image href="{href}" x="{x}" y="{y}" width="{TAG_WIDTH}" height="{TAG_HEIGHT}"/>
{ring}
<text x="{cx}" y="{label_y}" text-anchor="middle" font-size="10px" class="tag-label">{label}</text>
</g>
"#,
        token = escape_xml(&tag.token()),
        fill = tag.colour(),
        stroke = "#444",
        href = escape_xml(href),
        label = escape_xml(&tag.label()),
    )
}

// Lays out the keytag strip below the text and returns (groups, width, height)

fn build_keytags(calc: &Calculator, report: &Report, top: f32) -> (String, f32, f32) {
    if report.keytags.is_empty() {
        return (String::new(), 0.0, 0.0);
    }

    let layout = calc.options().layout;
    let per_row = match layout {
        Layout::Linear => report.keytags.len(),
        Layout::Tabular => TAGS_PER_ROW,
    };
    let images = calc.keytag_images(report);

    let mut out = String::new();
    for (i, (tag, href)) in report.keytags.iter().zip(&images).enumerate() {
        let col = (i % per_row) as f32;
        let row = (i / per_row) as f32;
        let x = LEFT_PADDING + col * (TAG_WIDTH + TAG_GAP);
        let y = top + row * (TAG_HEIGHT + TAG_GAP);
        out.push_str(&build_keytag(*tag, href, x, y, layout));
    }

    let rows = report.keytags.len().div_ceil(per_row);
    let cols = per_row.min(report.keytags.len());
    let width = LEFT_PADDING + cols as f32 * (TAG_WIDTH + TAG_GAP) + RIGHT_PADDING;
    let height = rows as f32 * (TAG_HEIGHT + TAG_GAP);
    (out, width, height)
}

/// Main SVG generation function
pub fn generate_svg(calc: &Calculator, report: &Report, theme: Theme) -> String {
    let colors = theme.colors();

    let (text_tspans, text_w, text_h) = build_text_column(calc, report);
    let (tag_groups, tags_w, tags_h) = build_keytags(calc, report, text_h);

    let w = text_w.max(tags_w);
    let h = text_h + tags_h + 30.0;

    format!(
        r#"<?xml version='1.0' encoding='UTF-8'?>
<svg xmlns="http://www.w3.org/2000/svg"
     width="{w}px" height="{h}px"
     font-family="ConsolasFallback,Consolas,monospace"
     font-size="16px">

<style>
.key       {{ fill: {key}; }}
.value     {{ fill: {value}; }}
.cc        {{ fill: {cc}; }}
.ring      {{ fill: none; stroke: {text}; stroke-width: 2; }}
.tag-label {{ fill: {cc}; }}
</style>

<rect width="{w}px" height="{h}px" fill="{bg}" rx="15"/>

<!-- RESULTS -->
<text fill="{text}">
{text_block}
</text>

<!-- KEYTAGS -->
{tags}
</svg>
"#,
        w = w,
        h = h,
        bg = colors.bg,
        text = colors.text,
        key = colors.key,
        value = colors.value,
        cc = colors.cc,
        text_block = text_tspans,
        tags = tag_groups
    )
}
