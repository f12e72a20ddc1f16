use base64::{engine::general_purpose, Engine as _};
use contracts::domain::a002_book::aggregate::BookId;
use contracts::domain::common::AggregateId;

use crate::shared::api_response::{AppError, AppResult};

pub const MAX_PROOF_BYTES: usize = 2 * 1024 * 1024;

/// Payment receipt sent as `data:<mime>;base64,<payload>`; returns the decoded size
pub fn check_proof(data_url: &str) -> AppResult<usize> {
    let (header, payload) = data_url
        .split_once(";base64,")
        .ok_or_else(|| AppError::validation("El justificante no tiene un formato válido"))?;
    let mime = header.strip_prefix("data:").unwrap_or_default();
    if !(mime.starts_with("image/") || mime == "application/pdf") {
        return Err(AppError::validation(
            "El justificante debe ser una imagen o un PDF",
        ));
    }
    let bytes = general_purpose::STANDARD
        .decode(payload.trim())
        .map_err(|_| AppError::validation("El justificante no tiene un formato válido"))?;
    if bytes.len() > MAX_PROOF_BYTES {
        return Err(AppError::validation("El justificante supera los 2 MB"));
    }
    Ok(bytes.len())
}

/// Every reserved book is assigned to the course
pub fn check_books_in_course(book_ids: &[BookId], course_books: &[i64]) -> AppResult<()> {
    match book_ids.iter().find(|b| !course_books.contains(&b.value())) {
        Some(missing) => Err(AppError::validation(format!(
            "El libro {} no está asignado al curso",
            missing.value()
        ))),
        None => Ok(()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_check_proof() {
        let payload = general_purpose::STANDARD.encode(b"%PDF-1.4 justificante");
        assert_eq!(
            check_proof(&format!("data:application/pdf;base64,{}", payload)).unwrap(),
            21
        );
        assert!(check_proof("data:image/png;base64,@@@").is_err());
        assert!(check_proof(&format!("data:text/html;base64,{}", payload)).is_err());
        assert!(check_proof("justificante.pdf").is_err());
    }

    #[test]
    fn test_books_must_belong_to_course() {
        assert!(check_books_in_course(&[BookId(1), BookId(2)], &[1, 2, 3]).is_ok());
        assert!(check_books_in_course(&[BookId(4)], &[1, 2, 3]).is_err());
    }
}
