//! 报表查询
//!
//! 成绩行从 student_summatives 联表 summatives 取得所属科目，
//! 聚合（平均分、及格判定）在服务层完成。

use super::SeaOrmStorage;
use crate::entity::prelude::{StudentSummatives, Summatives};
use crate::entity::student_summatives;
use crate::errors::{Result, SiakadError};
use sea_orm::{ColumnTrait, EntityTrait, QueryFilter};

impl SeaOrmStorage {
    /// 单个学生的全部成绩行 (科目ID, 分数)
    pub async fn list_student_score_rows_impl(
        &self,
        student_id: &str,
    ) -> Result<Vec<(String, f64)>> {
        let rows = StudentSummatives::find()
            .filter(student_summatives::Column::StudentId.eq(student_id))
            .find_also_related(Summatives)
            .all(&self.db)
            .await
            .map_err(|e| SiakadError::database_operation(format!("查询学生成绩失败: {e}")))?;

        Ok(rows
            .into_iter()
            .filter_map(|(score, summative)| {
                summative.map(|s| (s.subject_id, score.score))
            })
            .collect())
    }

    /// 一组学生的全部成绩行 (学生ID, 科目ID, 分数)
    pub async fn list_students_score_rows_impl(
        &self,
        student_ids: &[String],
    ) -> Result<Vec<(String, String, f64)>> {
        if student_ids.is_empty() {
            return Ok(Vec::new());
        }

        let rows = StudentSummatives::find()
            .filter(student_summatives::Column::StudentId.is_in(student_ids.iter().cloned()))
            .find_also_related(Summatives)
            .all(&self.db)
            .await
            .map_err(|e| SiakadError::database_operation(format!("查询班级成绩失败: {e}")))?;

        Ok(rows
            .into_iter()
            .filter_map(|(score, summative)| {
                summative.map(|s| (score.student_id, s.subject_id, score.score))
            })
            .collect())
    }
}
