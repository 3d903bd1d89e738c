//!
//! XLSX worksheet for benchmark data.
//!

use crate::model::record::Record;
use crate::report::speedup::Speedup;

///
/// XLSX worksheet for benchmark data of one kind.
///
pub struct Worksheet {
    /// The inner worksheet.
    pub worksheet: rust_xlsxwriter::Worksheet,
    /// The index of the next row to write.
    pub next_row: u32,
}

impl Worksheet {
    /// Header names and their column widths.
    const HEADERS: [(&'static str, usize); 7] = [
        ("Library", 24),
        ("Size", 10),
        ("ns/op", 14),
        ("MB/s", 14),
        ("B/op", 10),
        ("allocs/op", 10),
        ("Speedup vs baseline", 20),
    ];

    /// The speedup column index.
    const SPEEDUP_COLUMN: u16 = 6;

    ///
    /// Creates a new worksheet with the given name.
    ///
    pub fn new(name: &str) -> anyhow::Result<Self> {
        let mut worksheet = rust_xlsxwriter::Worksheet::new();
        worksheet.set_name(name)?;

        for (header_index, (header_name, column_width)) in Self::HEADERS.iter().enumerate() {
            worksheet.write_with_format(
                0,
                header_index as u16,
                *header_name,
                &Self::column_header_format(),
            )?;
            worksheet.set_column_width(header_index as u16, *column_width as f64)?;
        }
        worksheet.set_freeze_panes(1, 0)?;

        Ok(Self {
            worksheet,
            next_row: 1,
        })
    }

    ///
    /// Writes a notice spanning the row, used instead of records.
    ///
    pub fn write_notice(&mut self, notice: &str) -> anyhow::Result<()> {
        self.worksheet
            .write_with_format(self.next_row, 0, notice, &Self::notice_format())?;
        self.next_row += 1;
        Ok(())
    }

    ///
    /// Writes a record row, with the speedup unless it is the baseline's own record.
    ///
    pub fn write_record(
        &mut self,
        label: &str,
        record: &Record,
        speedup: Option<&Speedup>,
    ) -> anyhow::Result<()> {
        let row = self.next_row;

        self.worksheet
            .write_with_format(row, 0, label, &Self::row_header_format())?;
        self.worksheet
            .write_with_format(row, 1, record.size, &Self::value_format())?;
        self.worksheet
            .write_with_format(row, 2, record.time_per_op, &Self::value_format())?;
        self.worksheet
            .write_with_format(row, 3, record.throughput, &Self::value_format())?;
        self.worksheet
            .write_with_format(row, 4, record.bytes_per_op, &Self::value_format())?;
        self.worksheet
            .write_with_format(row, 5, record.allocs_per_op, &Self::value_format())?;

        if let Some(speedup) = speedup {
            match speedup.ratio() {
                Some(ratio) => {
                    let format = if speedup.is_improvement() {
                        Self::speedup_format().set_bold()
                    } else {
                        Self::speedup_format()
                    };
                    self.worksheet
                        .write_with_format(row, Self::SPEEDUP_COLUMN, ratio, &format)?;
                }
                None => {
                    self.worksheet.write_with_format(
                        row,
                        Self::SPEEDUP_COLUMN,
                        Speedup::NOT_APPLICABLE,
                        &Self::value_format(),
                    )?;
                }
            }
        }

        self.next_row += 1;
        Ok(())
    }

    ///
    /// Finalizes the worksheet and returns its inner object.
    ///
    pub fn into_inner(self) -> rust_xlsxwriter::Worksheet {
        self.worksheet
    }

    ///
    /// Returns the eponymous cell format.
    ///
    fn column_header_format() -> rust_xlsxwriter::Format {
        let format = rust_xlsxwriter::Format::new();
        let format = format.set_bold();
        let format = format.set_font_size(12);
        let format = format.set_font_color("#1E1E1E");
        let format = format.set_background_color("#EEF3FF");
        let format = format.set_align(rust_xlsxwriter::FormatAlign::Center);
        let format = format.set_align(rust_xlsxwriter::FormatAlign::Top);
        let format = format.set_border(rust_xlsxwriter::FormatBorder::None);
        format
    }

    ///
    /// Returns the eponymous cell format.
    ///
    fn row_header_format() -> rust_xlsxwriter::Format {
        let format = rust_xlsxwriter::Format::new();
        let format = format.set_font_size(12);
        let format = format.set_font_color("#1E1E1E");
        let format = format.set_background_color("#DDE6FF");
        let format = format.set_align(rust_xlsxwriter::FormatAlign::Left);
        let format = format.set_border(rust_xlsxwriter::FormatBorder::None);
        format
    }

    ///
    /// Returns the eponymous cell format.
    ///
    fn notice_format() -> rust_xlsxwriter::Format {
        let format = rust_xlsxwriter::Format::new();
        let format = format.set_bold();
        let format = format.set_font_size(12);
        let format = format.set_font_color("#C92A2A");
        format
    }

    ///
    /// Returns the eponymous cell format.
    ///
    fn value_format() -> rust_xlsxwriter::Format {
        let format = rust_xlsxwriter::Format::new();
        let format = format.set_font_size(12);
        let format = format.set_font_color("#000000");
        let format = format.set_background_color("#FFFFFF");
        let format = format.set_align(rust_xlsxwriter::FormatAlign::Right);
        let format = format.set_border(rust_xlsxwriter::FormatBorder::None);
        format
    }

    ///
    /// Returns the eponymous cell format.
    ///
    fn speedup_format() -> rust_xlsxwriter::Format {
        let format = Self::value_format();
        let format = format.set_num_format("0.00\"x\"");
        format
    }
}
