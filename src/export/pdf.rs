use pdf_writer::{Content, Name, Pdf, Rect, Ref, Str};

#[derive(Clone, Copy)]
pub enum FontStyle {
    Regular,
    Bold,
}

impl FontStyle {
    fn resource_name(self) -> Name<'static> {
        match self {
            FontStyle::Regular => Name(b"F1"),
            FontStyle::Bold => Name(b"F2"),
        }
    }
}

/// Minimal PDF builder: fixed-size pages, built-in Helvetica, text and
/// simple shapes. Positions passed to the drawing helpers are measured
/// from the top of the page.
pub struct PdfManager {
    pdf: Pdf,
    catalog_id: Ref,
    pages_id: Ref,
    page_refs: Vec<Ref>,
    current_content_id: Option<Ref>,

    page_w: f32,
    page_h: f32,

    next_id: i32,
    font_id: Ref,
    bold_font_id: Ref,
}

impl PdfManager {
    pub fn new(page_w: f32, page_h: f32) -> Self {
        let mut pdf = Pdf::new();

        let catalog_id = Ref::new(1);
        let pages_id = Ref::new(2);
        let font_id = Ref::new(3);
        let bold_font_id = Ref::new(4);
        let next_id = 5;

        pdf.type1_font(font_id)
            .base_font(Name(b"Helvetica"))
            .encoding_predefined(Name(b"WinAnsiEncoding"));
        pdf.type1_font(bold_font_id)
            .base_font(Name(b"Helvetica-Bold"))
            .encoding_predefined(Name(b"WinAnsiEncoding"));

        Self {
            pdf,
            catalog_id,
            pages_id,
            page_refs: Vec::new(),
            current_content_id: None,

            page_w,
            page_h,

            next_id,
            font_id,
            bold_font_id,
        }
    }

    pub fn page_width(&self) -> f32 {
        self.page_w
    }

    fn fresh_ref(&mut self) -> Ref {
        let id = self.next_id;
        self.next_id += 1;
        Ref::new(id)
    }

    /// Start a new page and return its content stream.
    pub fn new_page(&mut self) -> Content {
        let page_id = self.fresh_ref();
        let content_id = self.fresh_ref();

        self.page_refs.push(page_id);

        let mut page = self.pdf.page(page_id);
        page.parent(self.pages_id)
            .media_box(Rect::new(0.0, 0.0, self.page_w, self.page_h))
            .contents(content_id);

        page.resources()
            .fonts()
            .pair(Name(b"F1"), self.font_id)
            .pair(Name(b"F2"), self.bold_font_id);

        self.current_content_id = Some(content_id);

        Content::new()
    }

    /// Write the stream of the current page.
    pub fn finalize_page(&mut self, content: Content) {
        if let Some(id) = self.current_content_id.take() {
            self.pdf.stream(id, &content.finish());
        }
    }

    pub fn draw_text(
        &self,
        content: &mut Content,
        x: f32,
        top: f32,
        size: f32,
        style: FontStyle,
        text: &str,
    ) {
        let y = self.page_h - top;
        content.begin_text();
        content.set_font(style.resource_name(), size);
        content.set_text_matrix([1.0, 0.0, 0.0, 1.0, x, y]);
        content.show(Str(&to_win_ansi(text)));
        content.end_text();
    }

    /// Filled band of height `h` whose top edge is at `top`.
    pub fn fill_band(&self, content: &mut Content, x: f32, top: f32, w: f32, h: f32, gray: f32) {
        content.save_state();
        content.set_fill_rgb(gray, gray, gray);
        content.rect(x, self.page_h - top - h, w, h);
        content.fill_nonzero();
        content.restore_state();
    }

    pub fn draw_rule(&self, content: &mut Content, x1: f32, x2: f32, top: f32) {
        let y = self.page_h - top;
        content.save_state();
        content.set_stroke_rgb(0.65, 0.65, 0.65);
        content.set_line_width(0.8);
        content.move_to(x1, y);
        content.line_to(x2, y);
        content.stroke();
        content.restore_state();
    }

    fn build_pages_tree(&mut self) {
        let mut pages = self.pdf.pages(self.pages_id);
        pages.count(self.page_refs.len() as i32);
        pages.kids(self.page_refs.clone());
    }

    /// Serialize the document.
    pub fn finish(mut self) -> Vec<u8> {
        self.pdf.catalog(self.catalog_id).pages(self.pages_id);
        self.build_pages_tree();
        self.pdf.finish()
    }
}

/// Encode text for the WinAnsi-encoded standard fonts. Characters outside
/// the encoding become `?`.
pub(crate) fn to_win_ansi(text: &str) -> Vec<u8> {
    text.chars()
        .map(|c| match c {
            '\u{20}'..='\u{7e}' => c as u8,
            '€' => 0x80,
            '\u{a0}'..='\u{ff}' => c as u32 as u8,
            _ => b'?',
        })
        .collect()
}
