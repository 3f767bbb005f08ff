// search-core/src/reader.rs
//! 表格读取 - 打开文件，按工作表产出行与单元格文本

use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use calamine::{Data, Reader, Sheets, open_workbook_auto};
use chrono::{NaiveDateTime, NaiveTime};

use crate::error::ReaderError;

/// 表格读取器：打开一个文件，得到可逐表读取的工作簿
pub trait SheetReader: Send + Sync {
    type Workbook: Workbook;

    /// 打开失败（文件损坏、格式不支持）返回 `ReaderError::Open`
    fn open(&self, path: &Path) -> Result<Self::Workbook, ReaderError>;
}

/// 已打开的工作簿；drop 时释放文件句柄
pub trait Workbook {
    /// 按文件内顺序返回工作表名
    fn sheet_names(&self) -> Vec<String>;

    /// 读取一个工作表的全部行
    ///
    /// 下标是绝对位置：`rows[r][c]` 对应第 r+1 行、第 c+1 列。
    fn rows(&mut self, sheet: &str) -> Result<Vec<Vec<String>>, ReaderError>;
}

/// 基于 calamine 的读取器，支持 xlsx/xlsm/xlsb/xls/ods
#[derive(Debug, Clone, Copy, Default)]
pub struct CalamineReader;

pub struct CalamineWorkbook {
    sheets: Sheets<BufReader<File>>,
}

impl SheetReader for CalamineReader {
    type Workbook = CalamineWorkbook;

    fn open(&self, path: &Path) -> Result<CalamineWorkbook, ReaderError> {
        let sheets = open_workbook_auto(path).map_err(|e| ReaderError::Open {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;
        Ok(CalamineWorkbook { sheets })
    }
}

impl Workbook for CalamineWorkbook {
    fn sheet_names(&self) -> Vec<String> {
        self.sheets.sheet_names()
    }

    fn rows(&mut self, sheet: &str) -> Result<Vec<Vec<String>>, ReaderError> {
        let range = self
            .sheets
            .worksheet_range(sheet)
            .map_err(|e| ReaderError::Sheet {
                sheet: sheet.to_string(),
                message: e.to_string(),
            })?;

        let Some((start_row, start_col)) = range.start() else {
            return Ok(Vec::new());
        };

        // 已用区域不一定从 A1 开始，补齐前导空行空列
        let mut rows = vec![Vec::new(); start_row as usize];
        for row in range.rows() {
            let mut cells = vec![String::new(); start_col as usize];
            cells.extend(row.iter().map(cell_text));
            rows.push(cells);
        }
        Ok(rows)
    }
}

fn cell_text(cell: &Data) -> String {
    match cell {
        Data::Empty => String::new(),
        Data::String(s) => s.clone(),
        // 日期单元格按日历文本匹配，而不是序列号
        Data::DateTime(dt) if dt.is_datetime() => match dt.as_datetime() {
            Some(datetime) => date_text(datetime),
            None => cell.to_string(),
        },
        other => other.to_string(),
    }
}

fn date_text(datetime: NaiveDateTime) -> String {
    if datetime.time() == NaiveTime::MIN {
        datetime.format("%Y-%m-%d").to_string()
    } else {
        datetime.format("%Y-%m-%d %H:%M:%S").to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::SearchConfig;
    use crate::search::search_directory;
    use std::io::Write;
    use zip::write::SimpleFileOptions;

    const MAIN_NS: &str = "http://schemas.openxmlformats.org/spreadsheetml/2006/main";
    const REL_NS: &str = "http://schemas.openxmlformats.org/officeDocument/2006/relationships";

    // 第二个样式是内置日期格式 14
    const STYLES: &str = r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<styleSheet xmlns="http://schemas.openxmlformats.org/spreadsheetml/2006/main"><cellXfs count="2"><xf numFmtId="0" fontId="0" fillId="0" borderId="0" xfId="0"/><xf numFmtId="14" fontId="0" fillId="0" borderId="0" xfId="0" applyNumberFormat="1"/></cellXfs></styleSheet>"#;

    /// 写出一个最小的 xlsx：每项为（工作表名，sheetData 内的行 XML）
    fn write_xlsx(path: &Path, sheets: &[(&str, &str)]) {
        let mut content_types = String::from(
            r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?><Types xmlns="http://schemas.openxmlformats.org/package/2006/content-types"><Default Extension="rels" ContentType="application/vnd.openxmlformats-package.relationships+xml"/><Default Extension="xml" ContentType="application/xml"/><Override PartName="/xl/workbook.xml" ContentType="application/vnd.openxmlformats-officedocument.spreadsheetml.sheet.main+xml"/><Override PartName="/xl/styles.xml" ContentType="application/vnd.openxmlformats-officedocument.spreadsheetml.styles+xml"/>"#,
        );
        let mut workbook = format!(r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?><workbook xmlns="{MAIN_NS}" xmlns:r="{REL_NS}"><sheets>"#);
        let mut rels = String::from(
            r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?><Relationships xmlns="http://schemas.openxmlformats.org/package/2006/relationships">"#,
        );

        for (i, (name, _)) in sheets.iter().enumerate() {
            let n = i + 1;
            content_types.push_str(&format!(
                r#"<Override PartName="/xl/worksheets/sheet{n}.xml" ContentType="application/vnd.openxmlformats-officedocument.spreadsheetml.worksheet+xml"/>"#
            ));
            workbook.push_str(&format!(r#"<sheet name="{name}" sheetId="{n}" r:id="rId{n}"/>"#));
            rels.push_str(&format!(
                r#"<Relationship Id="rId{n}" Type="{REL_NS}/worksheet" Target="worksheets/sheet{n}.xml"/>"#
            ));
        }
        let styles_id = sheets.len() + 1;
        rels.push_str(&format!(
            r#"<Relationship Id="rId{styles_id}" Type="{REL_NS}/styles" Target="styles.xml"/>"#
        ));
        content_types.push_str("</Types>");
        workbook.push_str("</sheets></workbook>");
        rels.push_str("</Relationships>");

        let root_rels = format!(
            r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?><Relationships xmlns="http://schemas.openxmlformats.org/package/2006/relationships"><Relationship Id="rId1" Type="{REL_NS}/officeDocument" Target="xl/workbook.xml"/></Relationships>"#
        );

        let mut zip = zip::ZipWriter::new(File::create(path).unwrap());
        let options = SimpleFileOptions::default().compression_method(zip::CompressionMethod::Stored);
        let mut add = |name: &str, body: &str| {
            zip.start_file(name, options).unwrap();
            zip.write_all(body.as_bytes()).unwrap();
        };

        add("[Content_Types].xml", &content_types);
        add("_rels/.rels", &root_rels);
        add("xl/workbook.xml", &workbook);
        add("xl/_rels/workbook.xml.rels", &rels);
        add("xl/styles.xml", STYLES);
        for (i, (_, rows)) in sheets.iter().enumerate() {
            let sheet = format!(
                r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?><worksheet xmlns="{MAIN_NS}"><sheetData>{rows}</sheetData></worksheet>"#
            );
            add(&format!("xl/worksheets/sheet{}.xml", i + 1), &sheet);
        }
        zip.finish().unwrap();
    }

    #[test]
    fn test_open_non_spreadsheet_fails() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("broken.xlsx");
        std::fs::write(&path, b"this is not a zip archive").unwrap();

        let err = CalamineReader.open(&path).err().unwrap();
        assert!(matches!(err, ReaderError::Open { .. }));
    }

    #[test]
    fn test_open_missing_file_fails() {
        let dir = tempfile::tempdir().unwrap();
        let err = CalamineReader.open(&dir.path().join("missing.xlsx")).err().unwrap();
        assert!(matches!(err, ReaderError::Open { .. }));
    }

    #[test]
    fn test_cell_text() {
        assert_eq!(cell_text(&Data::Empty), "");
        assert_eq!(cell_text(&Data::String("Apple".to_string())), "Apple");
        assert_eq!(cell_text(&Data::Int(42)), "42");
        assert_eq!(cell_text(&Data::Bool(true)), "true");
    }

    #[test]
    fn test_rows_keep_absolute_positions() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("offset.xlsx");
        write_xlsx(
            &path,
            &[(
                "Data",
                r#"<row r="3"><c r="C3" t="inlineStr"><is><t>Apple</t></is></c></row><row r="5"><c r="E5"><v>42</v></c></row>"#,
            )],
        );

        let mut workbook = CalamineReader.open(&path).unwrap();
        assert_eq!(workbook.sheet_names(), vec!["Data".to_string()]);

        let rows = workbook.rows("Data").unwrap();
        assert_eq!(rows[2][2], "Apple");
        assert_eq!(rows[4][4], "42");
        assert!(rows[0].is_empty());
        assert_eq!(rows[2][..2], ["", ""]);
    }

    #[test]
    fn test_search_reports_absolute_cell_names() {
        let dir = tempfile::tempdir().unwrap();
        write_xlsx(
            &dir.path().join("offset.xlsx"),
            &[(
                "Data",
                r#"<row r="3"><c r="C3" t="inlineStr"><is><t>Apple</t></is></c></row><row r="5"><c r="E5"><v>42</v></c></row>"#,
            )],
        );

        let apple = search_directory(&CalamineReader, dir.path(), "apple", &SearchConfig::default()).unwrap();
        assert_eq!(apple.len(), 1);
        assert_eq!(apple[0].cell_coordinate, "C3");
        assert_eq!(apple[0].content, "Apple");

        let number = search_directory(&CalamineReader, dir.path(), "42", &SearchConfig::default()).unwrap();
        assert_eq!(number.len(), 1);
        assert_eq!(number[0].cell_coordinate, "E5");
    }

    #[test]
    fn test_search_real_workbook_in_order() {
        let dir = tempfile::tempdir().unwrap();
        write_xlsx(
            &dir.path().join("fruit.xlsx"),
            &[(
                "Sheet1",
                r#"<row r="1"><c r="A1" t="inlineStr"><is><t>apple</t></is></c><c r="B1" t="inlineStr"><is><t>banana</t></is></c></row><row r="2"><c r="A2" t="inlineStr"><is><t>Cherry</t></is></c><c r="B2" t="inlineStr"><is><t>apple pie</t></is></c></row>"#,
            )],
        );

        let hits = search_directory(&CalamineReader, dir.path(), "apple", &SearchConfig::default()).unwrap();
        let found: Vec<_> = hits
            .iter()
            .map(|m| (m.filename.as_str(), m.sheet_name.as_str(), m.cell_coordinate.as_str(), m.content.as_str()))
            .collect();
        assert_eq!(
            found,
            vec![
                ("fruit.xlsx", "Sheet1", "A1", "apple"),
                ("fruit.xlsx", "Sheet1", "B2", "apple pie"),
            ]
        );
    }

    #[test]
    fn test_date_cells_match_calendar_text() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("dates.xlsx");
        write_xlsx(
            &path,
            &[(
                "Sheet1",
                r#"<row r="1"><c r="A1" s="1"><v>45000</v></c><c r="B1" s="1"><v>45000.5</v></c><c r="C1"><v>45000</v></c></row>"#,
            )],
        );

        let rows = CalamineReader.open(&path).unwrap().rows("Sheet1").unwrap();
        assert_eq!(rows[0], ["2023-03-15", "2023-03-15 12:00:00", "45000"]);

        let hits = search_directory(&CalamineReader, dir.path(), "2023", &SearchConfig::default()).unwrap();
        let cells: Vec<_> = hits.iter().map(|m| m.cell_coordinate.as_str()).collect();
        assert_eq!(cells, ["A1", "B1"]);
    }
}
