//! Page layout.
//!
//! Turns the profile into a tall document of lines, records where each
//! section starts for navigation and scroll-spy, and registers every
//! interactive span in the hit map when the visible part is drawn.

use std::ops::Range;

use folio_content::Profile;
use folio_core::{ElementId, ElementKind, HitMap, Palette, Section, Theme};
use folio_effects::CARET;
use folio_fonts::{banner_width, build_banner, fit_banner};
use ratatui::{
    Frame,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Block,
};

use crate::text::{width, wrap};

/// Rows between the top of the body and the scroll-spy row.
pub const SPY_OFFSET: usize = 2;

/// Widest the content column gets.
const MAX_COLUMN_WIDTH: u16 = 100;

/// Width limit for centered prose.
const PROSE_WIDTH: usize = 72;

/// What activating an interactive element does.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    ScrollTo(Section),
    ToggleTheme,
    DownloadResume,
    OpenUrl(String),
}

/// Clickable span of a line, in columns from the start of the content column.
#[derive(Debug, Clone)]
struct Anchor {
    start: u16,
    width: u16,
    kind: ElementKind,
    action: Action,
    /// Label nested inside the element.
    label: Option<Range<u16>>,
}

#[derive(Debug, Clone, Default)]
struct DocLine {
    indent: u16,
    line: Line<'static>,
    anchors: Vec<Anchor>,
}

/// One styled piece of a line under construction.
struct Segment {
    text: String,
    style: Style,
    anchor: Option<(ElementKind, Action, Option<Range<u16>>)>,
}

impl Segment {
    fn plain(text: impl Into<String>, style: Style) -> Self {
        Self {
            text: text.into(),
            style,
            anchor: None,
        }
    }

    fn link(text: impl Into<String>, style: Style, action: Action) -> Self {
        Self {
            text: text.into(),
            style,
            anchor: Some((ElementKind::Link, action, None)),
        }
    }

    /// `[ label ]`, with the label registered as a child of the button.
    fn button(label: &str, style: Style, action: Action) -> Self {
        let start = 2;
        let end = start + width(label) as u16;
        Self {
            text: format!("[ {label} ]"),
            style,
            anchor: Some((ElementKind::Button, action, Some(start..end))),
        }
    }

    fn gap(n: usize) -> Self {
        Self::plain(" ".repeat(n), Style::new())
    }
}

/// Per-frame inputs to the layout.
#[derive(Debug, Clone, Copy)]
pub struct View<'a> {
    /// Content column width.
    pub width: u16,
    /// Body height; the hero fills at least this much.
    pub height: u16,
    /// Current typewriter text.
    pub typed: &'a str,
    /// Whether the caret is in the visible half of its blink.
    pub caret: bool,
}

/// The laid-out page.
#[derive(Debug, Clone, Default)]
pub struct Document {
    lines: Vec<DocLine>,
    sections: Vec<(Section, Range<usize>)>,
}

impl Document {
    /// Lay out the whole page.
    pub fn build(profile: &Profile, palette: Palette, view: View<'_>) -> Self {
        let mut b = Builder::new(palette, usize::from(view.width.max(1)));
        b.hero(profile, view);
        b.about(profile);
        b.skills(profile);
        b.experience(profile);
        b.projects(profile);
        b.education(profile);
        b.contact(profile);
        b.finish()
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    /// First line of `section`.
    pub fn section_start(&self, section: Section) -> Option<usize> {
        self.sections
            .iter()
            .find(|(s, _)| *s == section)
            .map(|(_, range)| range.start)
    }

    /// The section covering document line `line`.
    pub fn section_at(&self, line: usize) -> Option<Section> {
        self.section_index(line).map(|i| self.sections[i].0)
    }

    /// Largest useful scroll offset for a body `viewport` rows tall. Always
    /// lets the last section reach the top.
    pub fn max_scroll(&self, viewport: usize) -> usize {
        let tail = self.len().saturating_sub(viewport);
        let last = self.sections.last().map_or(0, |(_, range)| range.start);
        tail.max(last).min(self.len().saturating_sub(1))
    }

    /// Draw the lines visible at `scroll` into `body` and register sections
    /// and interactive spans under `parent`.
    pub fn render(
        &self,
        frame: &mut Frame,
        body: Rect,
        scroll: usize,
        hit: &mut HitMap<Action>,
        parent: ElementId,
    ) {
        let column = column_area(body);
        let visible = scroll..scroll + usize::from(body.height);

        // Sections first so their spans register as children.
        let section_ids: Vec<Option<ElementId>> = self
            .sections
            .iter()
            .map(|(_, range)| {
                let start = range.start.max(visible.start);
                let end = range.end.min(visible.end);
                (start < end).then(|| {
                    let area = Rect::new(
                        body.x,
                        body.y + (start - scroll) as u16,
                        body.width,
                        (end - start) as u16,
                    );
                    hit.push(ElementKind::Section, area, Some(parent), None)
                })
            })
            .collect();

        for (row, doc_line) in self
            .lines
            .iter()
            .enumerate()
            .skip(scroll)
            .take(usize::from(body.height))
        {
            let y = body.y + (row - scroll) as u16;
            let x = column.x.saturating_add(doc_line.indent);
            if x < column.right() {
                let area = Rect::new(x, y, column.right() - x, 1);
                frame.render_widget(doc_line.line.clone(), area);
            }

            let owner = self
                .section_index(row)
                .and_then(|i| section_ids[i])
                .unwrap_or(parent);
            for anchor in &doc_line.anchors {
                let Some(area) = clip(column, anchor.start, anchor.width, y) else {
                    continue;
                };
                let id = hit.push(anchor.kind, area, Some(owner), Some(anchor.action.clone()));
                if let Some(label) = &anchor.label
                    && let Some(area) = clip(column, label.start, label.end - label.start, y)
                {
                    hit.push(ElementKind::Text, area, Some(id), None);
                }
            }
        }
    }

    fn section_index(&self, line: usize) -> Option<usize> {
        self.sections
            .iter()
            .position(|(_, range)| range.contains(&line))
    }
}

/// Width of the content column inside a body `body_width` columns wide.
pub fn column_width(body_width: u16) -> u16 {
    if body_width <= 4 {
        body_width
    } else {
        (body_width - 4).min(MAX_COLUMN_WIDTH)
    }
}

fn column_area(body: Rect) -> Rect {
    let width = column_width(body.width);
    Rect::new(body.x + (body.width - width) / 2, body.y, width, body.height)
}

fn clip(column: Rect, start: u16, width: u16, y: u16) -> Option<Rect> {
    let x = column.x.saturating_add(start);
    if x >= column.right() || width == 0 {
        return None;
    }
    Some(Rect::new(x, y, width.min(column.right() - x), 1))
}

/// Draw the navigation bar and register its links and the theme toggle.
pub fn render_nav(
    frame: &mut Frame,
    area: Rect,
    profile: &Profile,
    theme: Theme,
    active: Section,
    hit: &mut HitMap<Action>,
    parent: ElementId,
) {
    let palette = theme.palette();
    frame.render_widget(Block::new().style(Style::new().bg(palette.background)), area);
    let nav = hit.push(ElementKind::Nav, area, Some(parent), None);
    if area.width < 4 {
        return;
    }

    let buf = frame.buffer_mut();
    let brand = profile.initials();
    let brand_style = Style::new().fg(palette.accent).add_modifier(Modifier::BOLD);
    let (mut x, _) = buf.set_stringn(area.x + 1, area.y, &brand, usize::from(area.width - 2), brand_style);
    x = x.saturating_add(3);

    let icon = if theme.is_dark() { "☀" } else { "☾" };
    let toggle = format!("[ {icon} ]");
    let toggle_width = width(&toggle) as u16;
    let toggle_x = area.right().saturating_sub(toggle_width + 1);

    for section in Section::ALL {
        let label = section.nav_label();
        let label_width = width(label) as u16;
        if x.saturating_add(label_width) >= toggle_x {
            break;
        }
        let style = if section == active {
            Style::new()
                .fg(palette.highlight)
                .add_modifier(Modifier::BOLD | Modifier::UNDERLINED)
        } else {
            Style::new().fg(palette.text)
        };
        buf.set_string(x, area.y, label, style);
        hit.push(
            ElementKind::Link,
            Rect::new(x, area.y, label_width, 1),
            Some(nav),
            Some(Action::ScrollTo(section)),
        );
        x += label_width + 2;
    }

    if toggle_x > area.x + 1 {
        buf.set_string(toggle_x, area.y, &toggle, Style::new().fg(palette.accent));
        let button = hit.push(
            ElementKind::Button,
            Rect::new(toggle_x, area.y, toggle_width, 1),
            Some(nav),
            Some(Action::ToggleTheme),
        );
        hit.push(
            ElementKind::Text,
            Rect::new(toggle_x + 2, area.y, width(icon) as u16, 1),
            Some(button),
            None,
        );
    }
}

/// Accumulates lines and section ranges.
struct Builder {
    palette: Palette,
    width: usize,
    lines: Vec<DocLine>,
    sections: Vec<(Section, Range<usize>)>,
    open: Option<(Section, usize)>,
}

impl Builder {
    fn new(palette: Palette, width: usize) -> Self {
        Self {
            palette,
            width,
            lines: Vec::new(),
            sections: Vec::new(),
            open: None,
        }
    }

    fn finish(mut self) -> Document {
        self.close();
        Document {
            lines: self.lines,
            sections: self.sections,
        }
    }

    fn begin(&mut self, section: Section) {
        self.close();
        self.open = Some((section, self.lines.len()));
    }

    fn close(&mut self) {
        if let Some((section, start)) = self.open.take() {
            self.sections.push((section, start..self.lines.len()));
        }
    }

    fn blank(&mut self) {
        self.lines.push(DocLine::default());
    }

    fn segments(&mut self, indent: usize, segments: Vec<Segment>) {
        let indent = indent.min(usize::from(u16::MAX)) as u16;
        let mut col = indent;
        let mut spans = Vec::with_capacity(segments.len());
        let mut anchors = Vec::new();
        for segment in segments {
            let w = width(&segment.text) as u16;
            if let Some((kind, action, label)) = segment.anchor {
                anchors.push(Anchor {
                    start: col,
                    width: w,
                    kind,
                    action,
                    label: label.map(|r| col + r.start..col + r.end),
                });
            }
            spans.push(Span::styled(segment.text, segment.style));
            col = col.saturating_add(w);
        }
        self.lines.push(DocLine {
            indent,
            line: Line::from(spans),
            anchors,
        });
    }

    fn centered(&mut self, segments: Vec<Segment>) {
        let total: usize = segments.iter().map(|s| width(&s.text)).sum();
        let indent = self.width.saturating_sub(total) / 2;
        self.segments(indent, segments);
    }

    fn text(&mut self, indent: usize, text: impl Into<String>, style: Style) {
        self.segments(indent, vec![Segment::plain(text, style)]);
    }

    fn paragraph(&mut self, indent: usize, text: &str, style: Style) {
        for line in wrap(text, self.width.saturating_sub(indent)) {
            self.text(indent, line, style);
        }
    }

    fn centered_paragraph(&mut self, text: &str, style: Style) {
        for line in wrap(text, self.width.min(PROSE_WIDTH)) {
            self.centered(vec![Segment::plain(line, style)]);
        }
    }

    /// `bullet text`, continuation lines aligned under the text.
    fn hanging(&mut self, indent: usize, bullet: &str, text: &str, bullet_style: Style, style: Style) {
        let hang = indent + width(bullet) + 1;
        for (i, line) in wrap(text, self.width.saturating_sub(hang)).into_iter().enumerate() {
            if i == 0 {
                self.segments(
                    indent,
                    vec![
                        Segment::plain(bullet, bullet_style),
                        Segment::gap(1),
                        Segment::plain(line, style),
                    ],
                );
            } else {
                self.text(hang, line, style);
            }
        }
    }

    /// Centered title with an accent rule under it.
    fn heading(&mut self, title: &str) {
        let p = self.palette;
        self.blank();
        self.centered(vec![Segment::plain(
            title,
            Style::new().fg(p.heading).add_modifier(Modifier::BOLD),
        )]);
        let rule = "━".repeat(width(title).clamp(4, 12));
        self.centered(vec![Segment::plain(rule, Style::new().fg(p.accent))]);
        self.blank();
    }

    fn hero(&mut self, profile: &Profile, view: View<'_>) {
        let p = self.palette;
        self.begin(Section::Hero);
        let start = self.lines.len();

        let role = profile.role.to_uppercase();
        self.centered(vec![Segment::plain(
            role,
            Style::new().fg(p.accent).add_modifier(Modifier::BOLD),
        )]);
        self.blank();

        let name_style = Style::new().fg(p.text).add_modifier(Modifier::BOLD);
        match name_banner(profile.name, self.width) {
            Some(rows) => {
                for row in rows {
                    self.centered(vec![Segment::plain(row, name_style)]);
                }
            }
            None => self.centered(vec![Segment::plain(profile.name.to_uppercase(), name_style)]),
        }
        self.blank();

        let caret = if view.caret { CARET } else { ' ' };
        self.centered(vec![
            Segment::plain(view.typed, Style::new().fg(p.accent)),
            Segment::plain(caret.to_string(), Style::new().fg(p.accent)),
        ]);
        self.blank();

        self.centered_paragraph(profile.blurb, Style::new().fg(p.muted));
        self.blank();

        let button = Style::new().fg(p.accent).add_modifier(Modifier::BOLD);
        self.centered(vec![
            Segment::button("View Projects", button, Action::ScrollTo(Section::Projects)),
            Segment::gap(3),
            Segment::button("↓ Resume", button, Action::DownloadResume),
        ]);

        // Fill the viewport and center the content vertically.
        let content = self.lines.len() - start;
        let target = usize::from(view.height).max(content + 2);
        let top = (target - content - 1) / 2;
        let body = self.lines.split_off(start);
        self.lines
            .extend(std::iter::repeat_with(DocLine::default).take(top));
        self.lines.extend(body);
        while self.lines.len() - start < target - 1 {
            self.blank();
        }
        self.centered(vec![Segment::plain("▾", Style::new().fg(p.accent))]);
    }

    fn about(&mut self, profile: &Profile) {
        let p = self.palette;
        self.begin(Section::About);
        self.heading("About Me");
        for paragraph in profile.about {
            self.paragraph(2, paragraph, Style::new().fg(p.text));
            self.blank();
        }
        let contact = &profile.contact;
        self.segments(
            2,
            vec![
                Segment::plain("✉ ", Style::new().fg(p.accent)),
                Segment::link(
                    contact.email,
                    Style::new().fg(p.accent).add_modifier(Modifier::UNDERLINED),
                    Action::OpenUrl(contact.mailto()),
                ),
            ],
        );
        self.segments(
            2,
            vec![
                Segment::plain("⌂ ", Style::new().fg(p.accent)),
                Segment::plain(contact.location, Style::new().fg(p.muted)),
            ],
        );
        self.blank();
    }

    fn skills(&mut self, profile: &Profile) {
        let p = self.palette;
        self.begin(Section::Skills);
        self.heading("Skills & Technologies");
        for group in profile.skills {
            self.text(
                2,
                group.name,
                Style::new().fg(p.accent).add_modifier(Modifier::BOLD),
            );
            let tags = group
                .skills
                .iter()
                .map(|skill| format!("‹{skill}›"))
                .collect::<Vec<_>>()
                .join(" ");
            self.paragraph(4, &tags, Style::new().fg(p.text));
            self.blank();
        }
    }

    fn experience(&mut self, profile: &Profile) {
        let p = self.palette;
        self.begin(Section::Experience);
        self.heading("Experience");
        for job in profile.experience {
            self.segments(
                2,
                vec![
                    Segment::plain("▸ ", Style::new().fg(p.accent)),
                    Segment::plain(
                        job.title,
                        Style::new().fg(p.text).add_modifier(Modifier::BOLD),
                    ),
                ],
            );
            self.text(4, format!("{} · {}", job.company, job.period), Style::new().fg(p.muted));
            for point in job.points {
                self.hanging(4, "•", point, Style::new().fg(p.accent), Style::new().fg(p.text));
            }
            self.blank();
        }
    }

    fn projects(&mut self, profile: &Profile) {
        let p = self.palette;
        self.begin(Section::Projects);
        self.heading("Featured Projects");
        for project in profile.projects {
            self.segments(
                2,
                vec![
                    Segment::plain("◆ ", Style::new().fg(p.accent)),
                    Segment::plain(
                        project.title,
                        Style::new().fg(p.text).add_modifier(Modifier::BOLD),
                    ),
                ],
            );
            self.paragraph(4, project.description, Style::new().fg(p.muted));
            let tags = project
                .tech
                .iter()
                .map(|t| format!("#{t}"))
                .collect::<Vec<_>>()
                .join(" ");
            self.paragraph(4, &tags, Style::new().fg(p.accent));
            self.segments(
                4,
                vec![Segment::link(
                    "↗ View on GitHub",
                    Style::new().fg(p.accent).add_modifier(Modifier::UNDERLINED),
                    Action::OpenUrl(project.repository.to_string()),
                )],
            );
            self.blank();
        }

        self.centered(vec![Segment::plain(
            "Explore More",
            Style::new().fg(p.heading).add_modifier(Modifier::BOLD),
        )]);
        self.centered(vec![Segment::plain(
            "Check out my complete portfolio on GitHub",
            Style::new().fg(p.muted),
        )]);
        self.centered(vec![Segment::button(
            "View All Projects",
            Style::new().fg(p.accent).add_modifier(Modifier::BOLD),
            Action::OpenUrl(profile.contact.github.to_string()),
        )]);
        self.blank();
    }

    fn education(&mut self, profile: &Profile) {
        let p = self.palette;
        self.begin(Section::Education);
        self.heading("Education");
        for entry in profile.education {
            self.segments(
                2,
                vec![
                    Segment::plain("▸ ", Style::new().fg(p.accent)),
                    Segment::plain(
                        entry.degree,
                        Style::new().fg(p.text).add_modifier(Modifier::BOLD),
                    ),
                    Segment::plain(" · ", Style::new().fg(p.muted)),
                    Segment::plain(entry.field, Style::new().fg(p.text)),
                ],
            );
            self.paragraph(4, entry.institution, Style::new().fg(p.muted));
            self.text(4, entry.status, Style::new().fg(p.accent));
            self.blank();
        }
    }

    fn contact(&mut self, profile: &Profile) {
        let p = self.palette;
        let contact = &profile.contact;
        self.begin(Section::Contact);
        self.heading("Let's Work Together");
        self.centered_paragraph(profile.contact_pitch, Style::new().fg(p.text));
        self.blank();

        let link = Style::new().fg(p.accent).add_modifier(Modifier::BOLD);
        self.centered(vec![
            Segment::button("✉ Email", link, Action::OpenUrl(contact.mailto())),
            Segment::gap(2),
            Segment::button("GitHub", link, Action::OpenUrl(contact.github.to_string())),
            Segment::gap(2),
            Segment::button("LinkedIn", link, Action::OpenUrl(contact.linkedin.to_string())),
        ]);
        self.blank();
        self.blank();
        self.centered(vec![Segment::plain(profile.footer, Style::new().fg(p.muted))]);
        self.blank();
    }
}

/// The name as block letters, broken into as few rows of words as fit.
fn name_banner(name: &str, max_width: usize) -> Option<Vec<String>> {
    let upper = name.to_uppercase();
    if let Some(rows) = fit_banner(&upper, max_width) {
        return Some(rows);
    }
    let mut groups: Vec<String> = Vec::new();
    for word in upper.split_whitespace() {
        if banner_width(word) > max_width {
            return None;
        }
        match groups.last_mut() {
            Some(group) if banner_width(&format!("{group} {word}")) <= max_width => {
                group.push(' ');
                group.push_str(word);
            }
            _ => groups.push(word.to_string()),
        }
    }
    if groups.is_empty() {
        return None;
    }

    let mut rows = Vec::new();
    for (i, group) in groups.iter().enumerate() {
        if i > 0 {
            rows.push(String::new());
        }
        rows.extend(build_banner(group));
    }
    Some(rows)
}
