use crate::db::models::{Category, NewQuestion, Question};
use crate::db::schema::{DEFAULT_CATEGORIES, SQLITE_INIT};
use crate::error::TriviaError;
use sqlx::{Pool, Sqlite};

pub type SqlitePool = Pool<Sqlite>;

const QUESTION_COLUMNS: &str = "id, question, answer, category, difficulty";

#[derive(Clone)]
pub struct TriviaStorage {
    pool: SqlitePool,
}

impl TriviaStorage {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Initialize the schema by executing the bundled DDL.
    pub async fn init_schema(&self) -> Result<(), TriviaError> {
        // sqlx::query runs one statement at a time
        for stmt in SQLITE_INIT.split(';') {
            let s = stmt.trim();
            if s.is_empty() {
                continue;
            }
            sqlx::query(s).execute(&self.pool).await?;
        }
        Ok(())
    }

    /// Insert the default categories if the table is empty.
    /// Returns how many rows were inserted.
    pub async fn seed_default_categories(&self) -> Result<usize, TriviaError> {
        let mut tx = self.pool.begin().await?;
        let (existing,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM categories")
            .fetch_one(&mut *tx)
            .await?;
        if existing > 0 {
            return Ok(0);
        }
        for name in DEFAULT_CATEGORIES {
            sqlx::query("INSERT INTO categories (type) VALUES (?)")
                .bind(name)
                .execute(&mut *tx)
                .await?;
        }
        tx.commit().await?;
        Ok(DEFAULT_CATEGORIES.len())
    }

    pub async fn list_categories(&self) -> Result<Vec<Category>, TriviaError> {
        let rows = sqlx::query_as::<_, Category>("SELECT id, type FROM categories ORDER BY id")
            .fetch_all(&self.pool)
            .await?;
        Ok(rows)
    }

    pub async fn list_questions(&self) -> Result<Vec<Question>, TriviaError> {
        let sql = format!("SELECT {QUESTION_COLUMNS} FROM questions ORDER BY id");
        let rows = sqlx::query_as::<_, Question>(&sql)
            .fetch_all(&self.pool)
            .await?;
        Ok(rows)
    }

    pub async fn list_questions_by_category(
        &self,
        category: i64,
    ) -> Result<Vec<Question>, TriviaError> {
        let sql = format!("SELECT {QUESTION_COLUMNS} FROM questions WHERE category = ? ORDER BY id");
        let rows = sqlx::query_as::<_, Question>(&sql)
            .bind(category)
            .fetch_all(&self.pool)
            .await?;
        Ok(rows)
    }

    pub async fn count_questions(&self) -> Result<i64, TriviaError> {
        let (count,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM questions")
            .fetch_one(&self.pool)
            .await?;
        Ok(count)
    }

    /// Insert a question. Returns the assigned id.
    pub async fn insert_question(&self, q: NewQuestion) -> Result<i64, TriviaError> {
        let result = sqlx::query(
            r#"INSERT INTO questions (question, answer, category, difficulty)
               VALUES (?, ?, ?, ?)"#,
        )
        .bind(q.question)
        .bind(q.answer)
        .bind(q.category)
        .bind(q.difficulty)
        .execute(&self.pool)
        .await?;
        Ok(result.last_insert_rowid())
    }

    /// Delete a question by id. `NotFound` when no row had that id.
    pub async fn delete_question(&self, id: i64) -> Result<(), TriviaError> {
        let result = sqlx::query("DELETE FROM questions WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await?;
        if result.rows_affected() == 0 {
            return Err(TriviaError::NotFound);
        }
        Ok(())
    }
}
