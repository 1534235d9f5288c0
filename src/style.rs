/// Visual contract for the generated document. Sizes and spacing are in
/// points; colors are RGB.
#[derive(Debug, Clone)]
pub struct StyleConfig {
    pub font_name: String,
    pub body_size: u32,
    pub name_size: u32,
    pub contact_size: u32,
    pub section_size: u32,
    pub entry_size: u32,
    pub accent_color: [u8; 3],
    pub muted_color: [u8; 3],
    pub section_space_before: u32,
    pub section_space_after: u32,
    pub bullet_indent: u32, // 0.25" by default
}

impl Default for StyleConfig {
    fn default() -> Self {
        StyleConfig {
            font_name: "Calibri".to_string(),
            body_size: 11,
            name_size: 20,
            contact_size: 10,
            section_size: 14,
            entry_size: 12,
            accent_color: [0, 51, 102],
            muted_color: [100, 100, 100],
            section_space_before: 12,
            section_space_after: 6,
            bullet_indent: 18,
        }
    }
}
