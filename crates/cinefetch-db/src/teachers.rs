//! Teacher collection CRUD operations.

use anyhow::{Context, Result};
use rusqlite::{Connection, Row};

use super::prefix;

/// Searchable teacher fields, in result priority order.
const SEARCH_FIELDS: [&str; 3] = ["name", "department", "position"];

/// A stored teacher.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TeacherDoc {
    /// Store-assigned ID (empty until saved).
    pub id: String,
    /// Full name.
    pub name: String,
    /// Department.
    pub department: String,
    /// Position or title.
    pub position: String,
}

impl TeacherDoc {
    /// Creates an unsaved teacher.
    #[must_use]
    pub fn new(
        name: impl Into<String>,
        department: impl Into<String>,
        position: impl Into<String>,
    ) -> Self {
        Self {
            id: String::new(),
            name: name.into(),
            department: department.into(),
            position: position.into(),
        }
    }
}

fn from_row(row: &Row<'_>) -> rusqlite::Result<TeacherDoc> {
    let id: i64 = row.get(0)?;
    Ok(TeacherDoc {
        id: id.to_string(),
        name: row.get(1)?,
        department: row.get(2)?,
        position: row.get(3)?,
    })
}

/// Stores a teacher and returns its new ID. `teacher.id` is ignored.
///
/// # Errors
///
/// Returns an error if the database operation fails.
pub fn add_teacher(conn: &Connection, teacher: &TeacherDoc) -> Result<String> {
    conn.execute(
        "INSERT INTO teachers (name, department, position, created_at) VALUES (?1, ?2, ?3, ?4)",
        rusqlite::params![
            teacher.name,
            teacher.department,
            teacher.position,
            chrono::Utc::now().to_rfc3339(),
        ],
    )
    .with_context(|| format!("failed to add teacher {}", teacher.name))?;

    Ok(conn.last_insert_rowid().to_string())
}

/// Loads all teachers in insertion order.
///
/// # Errors
///
/// Returns an error if the database query fails.
pub fn load_teachers(conn: &Connection) -> Result<Vec<TeacherDoc>> {
    let mut stmt = conn
        .prepare("SELECT id, name, department, position FROM teachers ORDER BY id")
        .context("failed to prepare teachers query")?;

    let rows = stmt
        .query_map([], from_row)
        .context("failed to query teachers")?;

    rows.collect::<std::result::Result<Vec<_>, _>>()
        .context("failed to read teachers rows")
}

/// Teachers whose name, department or position starts with `keyword`.
///
/// Name matches come first, then department, then position; each teacher
/// appears once. A blank keyword lists every teacher.
///
/// # Errors
///
/// Returns an error if the database query fails.
pub fn search_teachers(conn: &Connection, keyword: &str) -> Result<Vec<TeacherDoc>> {
    let keyword = keyword.trim();
    if keyword.is_empty() {
        return load_teachers(conn);
    }

    let (lower, upper) = prefix::bounds(keyword);
    let mut found: Vec<TeacherDoc> = Vec::new();

    for field in SEARCH_FIELDS {
        let sql = format!(
            "SELECT id, name, department, position FROM teachers
             WHERE {field} >= ?1 AND {field} <= ?2
             ORDER BY {field}, id"
        );
        let mut stmt = conn
            .prepare(&sql)
            .with_context(|| format!("failed to prepare teachers {field} search"))?;
        let rows = stmt
            .query_map([&lower, &upper], from_row)
            .with_context(|| format!("failed to search teachers by {field}"))?;

        for row in rows {
            let teacher = row.context("failed to read teachers rows")?;
            if !found.iter().any(|t| t.id == teacher.id) {
                found.push(teacher);
            }
        }
    }

    tracing::debug!(keyword, count = found.len(), "Searched teachers");
    Ok(found)
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]
    #![allow(clippy::indexing_slicing)]

    use super::*;
    use crate::migrations::run_migrations;

    fn setup_db() -> Connection {
        let conn = Connection::open_in_memory().unwrap();
        run_migrations(&conn).unwrap();
        for (name, department, position) in [
            ("陳大文", "資訊工程系", "教授"),
            ("王小明", "資訊管理系", "副教授"),
            ("林資安", "電機工程系", "講師"),
        ] {
            add_teacher(&conn, &TeacherDoc::new(name, department, position)).unwrap();
        }
        conn
    }

    #[test]
    fn test_load_teachers_keeps_insertion_order() {
        // Arrange
        let conn = setup_db();

        // Act
        let teachers = load_teachers(&conn).unwrap();

        // Assert
        assert_eq!(teachers.len(), 3);
        assert_eq!(teachers[0].name, "陳大文");
        assert_eq!(teachers[2].position, "講師");
    }

    #[test]
    fn test_search_by_department_prefix() {
        // Arrange
        let conn = setup_db();

        // Act
        let found = search_teachers(&conn, "資訊").unwrap();

        // Assert
        let names: Vec<&str> = found.iter().map(|t| t.name.as_str()).collect();
        assert_eq!(names, vec!["陳大文", "王小明"]);
    }

    #[test]
    fn test_search_name_hits_precede_department_hits() {
        // Arrange
        let conn = setup_db();
        add_teacher(&conn, &TeacherDoc::new("資深顧問", "校長室", "顧問")).unwrap();

        // Act
        let found = search_teachers(&conn, "資").unwrap();

        // Assert
        assert_eq!(found[0].name, "資深顧問");
        assert_eq!(found.len(), 3);
    }

    #[test]
    fn test_search_by_position_prefix() {
        // Arrange
        let conn = setup_db();

        // Act
        let found = search_teachers(&conn, "教授").unwrap();

        // Assert
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].name, "陳大文");
    }

    #[test]
    fn test_search_without_match_is_empty() {
        // Arrange
        let conn = setup_db();

        // Act & Assert
        assert!(search_teachers(&conn, "物理").unwrap().is_empty());
        assert_eq!(search_teachers(&conn, "").unwrap().len(), 3);
    }
}
