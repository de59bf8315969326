//! Footer pass, run once every content page exists.

use super::layout::{Color, DrawCommand, Layer, Layout, PAGE_HEIGHT, PAGE_WIDTH};
use super::text::{text_width, Font};
use super::Branding;

const FOOTER_SIZE: f32 = 8.0;

/// Stamp the two-line footer (postal address, then `website — Page i/N`) on
/// every page.
///
/// Footers from an earlier pass are removed first, so the page total is
/// always the final one and each page carries exactly one footer.
pub fn stamp_footers(layout: &mut Layout, branding: &Branding) {
    let total = layout.pages.len();

    for (index, page) in layout.pages.iter_mut().enumerate() {
        page.commands.retain(|command| command.layer() != Layer::Footer);

        let lines = [
            (branding.address.clone(), PAGE_HEIGHT - 38.0),
            (
                format!("{} — Page {}/{}", branding.website, index + 1, total),
                PAGE_HEIGHT - 26.0,
            ),
        ];
        for (text, y) in lines {
            let x = (PAGE_WIDTH - text_width(&text, Font::Regular, FOOTER_SIZE)) / 2.0;
            page.commands.push(DrawCommand::Text {
                x,
                y,
                text,
                font: Font::Regular,
                size: FOOTER_SIZE,
                color: Color::GREY,
                layer: Layer::Footer,
            });
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::contract::layout::{Page, CONTENT_BOTTOM};

    fn layout_with_pages(count: usize) -> Layout {
        Layout {
            pages: vec![Page::default(); count],
            outline: Vec::new(),
        }
    }

    #[test]
    fn test_every_page_gets_final_total() {
        let mut layout = layout_with_pages(3);
        stamp_footers(&mut layout, &Branding::default());

        for (i, page) in layout.pages.iter().enumerate() {
            let lines = page.footer_lines();
            assert_eq!(lines.len(), 2);
            assert!(lines[1].ends_with(&format!("Page {}/3", i + 1)));
        }
    }

    #[test]
    fn test_restamping_replaces_stale_footers() {
        let mut layout = layout_with_pages(1);
        stamp_footers(&mut layout, &Branding::default());
        layout.pages.push(Page::default());
        stamp_footers(&mut layout, &Branding::default());

        assert_eq!(layout.pages[0].footer_lines().len(), 2);
        assert!(layout.pages[0].footer_lines()[1].ends_with("Page 1/2"));
        assert!(layout.pages[1].footer_lines()[1].ends_with("Page 2/2"));
    }

    #[test]
    fn test_footer_sits_below_content_area() {
        let mut layout = layout_with_pages(1);
        stamp_footers(&mut layout, &Branding::default());
        assert!(layout.pages[0]
            .commands
            .iter()
            .all(|command| command.bottom() > CONTENT_BOTTOM));
    }
}
