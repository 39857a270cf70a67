use rust_xlsxwriter::*;

use crate::error::Result;
use crate::models::candidate::{Candidate, CandidateSource, CandidateStatus};

pub const XLSX_CONTENT_TYPE: &str =
    "application/vnd.openxmlformats-officedocument.spreadsheetml.sheet";

pub struct ExportService;

impl ExportService {
    fn status_color(status: CandidateStatus) -> Color {
        match status {
            CandidateStatus::Screening => Color::RGB(0x3B82F6),
            CandidateStatus::Interview => Color::RGB(0xF59E0B),
            CandidateStatus::Approved => Color::RGB(0x10B981),
            CandidateStatus::Rejected => Color::RGB(0xEF4444),
        }
    }

    fn score_color(score: f64) -> Color {
        if score >= 70.0 {
            Color::RGB(0x10B981)
        } else if score >= 40.0 {
            Color::RGB(0xF59E0B)
        } else {
            Color::RGB(0xEF4444)
        }
    }

    /// Workbook with one row per candidate, as shown in the talent pool.
    pub fn talent_pool_xlsx(candidates: &[Candidate]) -> Result<Vec<u8>> {
        let mut workbook = Workbook::new();
        let worksheet = workbook.add_worksheet();
        worksheet.set_name("Candidatos")?;

        let primary_color = Color::RGB(0x312E81);
        let header_bg = Color::RGB(0x4338CA);
        let alt_row_1 = Color::RGB(0xF8FAFC);
        let alt_row_2 = Color::White;
        let border_color = Color::RGB(0xE2E8F0);

        let columns = [
            ("#", 6.0),
            ("Nome", 30.0),
            ("Idade", 8.0),
            ("Sexo", 12.0),
            ("Escolaridade", 28.0),
            ("Vagas", 35.0),
            ("Status", 14.0),
            ("Score", 10.0),
            ("Email", 30.0),
            ("Telefone", 18.0),
            ("Origem", 12.0),
        ];
        for (i, (_, width)) in columns.iter().enumerate() {
            worksheet.set_column_width(i as u16, *width)?;
        }
        let last_col = (columns.len() - 1) as u16;

        let title_format = Format::new()
            .set_font_size(16)
            .set_bold()
            .set_font_color(Color::White)
            .set_background_color(primary_color)
            .set_align(FormatAlign::CenterAcross)
            .set_align(FormatAlign::VerticalCenter);
        worksheet.set_row_height(0, 36)?;
        worksheet.merge_range(0, 0, 0, last_col, "Banco de Talentos", &title_format)?;

        let subtitle_format = Format::new()
            .set_font_size(10)
            .set_italic()
            .set_font_color(Color::RGB(0xC7D2FE))
            .set_background_color(primary_color)
            .set_align(FormatAlign::CenterAcross)
            .set_align(FormatAlign::VerticalCenter);
        let now = chrono::Utc::now().format("%d/%m/%Y %H:%M UTC").to_string();
        let subtitle = format!("Exportado em {}  •  {} candidatos", now, candidates.len());
        worksheet.merge_range(1, 0, 1, last_col, &subtitle, &subtitle_format)?;

        let header_format = Format::new()
            .set_bold()
            .set_font_size(10)
            .set_font_color(Color::White)
            .set_background_color(header_bg)
            .set_align(FormatAlign::Center)
            .set_align(FormatAlign::VerticalCenter)
            .set_border(FormatBorder::Thin)
            .set_border_color(border_color);
        let header_row = 2;
        worksheet.set_row_height(header_row, 26)?;
        for (i, (name, _)) in columns.iter().enumerate() {
            worksheet.write_string_with_format(header_row, i as u16, *name, &header_format)?;
        }

        let data_start_row = 3;
        for (idx, candidate) in candidates.iter().enumerate() {
            let row = data_start_row + idx as u32;
            let bg = if idx % 2 == 0 { alt_row_1 } else { alt_row_2 };

            let base_fmt = Format::new()
                .set_font_size(10)
                .set_background_color(bg)
                .set_align(FormatAlign::VerticalCenter)
                .set_border(FormatBorder::Thin)
                .set_border_color(border_color);
            let center_fmt = base_fmt.clone().set_align(FormatAlign::Center);
            let wrap_fmt = base_fmt.clone().set_text_wrap();

            worksheet.write_number_with_format(row, 0, (idx + 1) as f64, &center_fmt)?;
            worksheet.write_string_with_format(row, 1, &candidate.name, &base_fmt.clone().set_bold())?;

            match candidate.age.filter(|&age| age > 0) {
                Some(age) => worksheet.write_number_with_format(row, 2, age as f64, &center_fmt)?,
                None => worksheet.write_string_with_format(row, 2, "—", &center_fmt)?,
            };
            worksheet.write_string_with_format(row, 3, candidate.sex.as_deref().unwrap_or("—"), &base_fmt)?;
            worksheet.write_string_with_format(
                row,
                4,
                candidate.education.as_deref().unwrap_or("—"),
                &base_fmt,
            )?;

            let jobs = candidate
                .jobs
                .iter()
                .map(|job| job.value.as_str())
                .collect::<Vec<_>>()
                .join(", ");
            let jobs = if jobs.is_empty() { "—".to_string() } else { jobs };
            worksheet.write_string_with_format(row, 5, &jobs, &wrap_fmt)?;

            let status_fmt = Format::new()
                .set_font_size(10)
                .set_bold()
                .set_font_color(Color::White)
                .set_background_color(Self::status_color(candidate.status))
                .set_align(FormatAlign::Center)
                .set_align(FormatAlign::VerticalCenter)
                .set_border(FormatBorder::Thin)
                .set_border_color(border_color);
            worksheet.write_string_with_format(row, 6, candidate.status.stored_value(), &status_fmt)?;

            if let Some(score) = candidate.score {
                let score_fmt = center_fmt
                    .clone()
                    .set_bold()
                    .set_font_color(Self::score_color(score));
                worksheet.write_number_with_format(row, 7, score, &score_fmt)?;
            } else {
                worksheet.write_string_with_format(row, 7, "—", &center_fmt)?;
            }

            worksheet.write_string_with_format(row, 8, candidate.email.as_deref().unwrap_or("—"), &base_fmt)?;
            worksheet.write_string_with_format(row, 9, candidate.phone.as_deref().unwrap_or("—"), &base_fmt)?;

            let origin = match candidate.source {
                CandidateSource::Regular => "Upload",
                CandidateSource::Chat => "WhatsApp",
            };
            worksheet.write_string_with_format(row, 10, origin, &center_fmt)?;
        }

        worksheet.set_freeze_panes(3, 0)?;
        let last_row = (data_start_row + candidates.len() as u32).saturating_sub(1).max(header_row);
        worksheet.autofilter(header_row, 0, last_row, last_col)?;

        let buffer = workbook.save_to_buffer()?;
        Ok(buffer)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::LinkRef;

    #[test]
    fn writes_a_zip_container() {
        let candidate = Candidate {
            id: 1,
            source: CandidateSource::Chat,
            name: "Ana".into(),
            age: Some(28),
            sex: Some("Feminino".into()),
            education: None,
            jobs: vec![LinkRef::synthetic("Backend")],
            users: vec![LinkRef::new(7, "Rita")],
            status: CandidateStatus::Interview,
            score: Some(82.5),
            email: None,
            phone: None,
            summary: None,
        };

        let bytes = ExportService::talent_pool_xlsx(&[candidate]).unwrap();
        assert_eq!(&bytes[..2], b"PK");

        let empty = ExportService::talent_pool_xlsx(&[]).unwrap();
        assert_eq!(&empty[..2], b"PK");
    }
}
