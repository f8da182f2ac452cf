use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // 创建科目表
        manager
            .create_table(
                Table::create()
                    .table(Subjects::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Subjects::Id)
                            .string()
                            .not_null()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(Subjects::SchoolAcademicYearId)
                            .string()
                            .not_null(),
                    )
                    .col(ColumnDef::new(Subjects::TeacherId).string().null())
                    .col(ColumnDef::new(Subjects::Name).string().not_null())
                    .col(ColumnDef::new(Subjects::Code).string().null())
                    .col(
                        ColumnDef::new(Subjects::PassingGrade)
                            .double()
                            .not_null()
                            .default(70.0),
                    )
                    .col(
                        ColumnDef::new(Subjects::CreatedAt)
                            .big_integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(Subjects::UpdatedAt)
                            .big_integer()
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .from(Subjects::Table, Subjects::SchoolAcademicYearId)
                            .to(SchoolAcademicYears::Table, SchoolAcademicYears::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .from(Subjects::Table, Subjects::TeacherId)
                            .to(Teachers::Table, Teachers::Id)
                            .on_delete(ForeignKeyAction::SetNull),
                    )
                    .to_owned(),
            )
            .await?;

        // 同一学校学年内科目名唯一
        manager
            .create_index(
                Index::create()
                    .name("idx_subjects_scope_name")
                    .table(Subjects::Table)
                    .col(Subjects::SchoolAcademicYearId)
                    .col(Subjects::Name)
                    .unique()
                    .to_owned(),
            )
            .await?;

        // 创建总结性评价表
        manager
            .create_table(
                Table::create()
                    .table(Summatives::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Summatives::Id)
                            .string()
                            .not_null()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Summatives::SubjectId).string().not_null())
                    .col(ColumnDef::new(Summatives::Title).string().not_null())
                    .col(ColumnDef::new(Summatives::Description).text().null())
                    .col(ColumnDef::new(Summatives::AssessedAt).string().null())
                    .col(
                        ColumnDef::new(Summatives::CreatedAt)
                            .big_integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(Summatives::UpdatedAt)
                            .big_integer()
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .from(Summatives::Table, Summatives::SubjectId)
                            .to(Subjects::Table, Subjects::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // 创建学生成绩表
        manager
            .create_table(
                Table::create()
                    .table(StudentSummatives::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(StudentSummatives::Id)
                            .string()
                            .not_null()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(StudentSummatives::SummativeId)
                            .string()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(StudentSummatives::StudentId)
                            .string()
                            .not_null(),
                    )
                    .col(ColumnDef::new(StudentSummatives::Score).double().not_null())
                    .col(
                        ColumnDef::new(StudentSummatives::CreatedAt)
                            .big_integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(StudentSummatives::UpdatedAt)
                            .big_integer()
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .from(StudentSummatives::Table, StudentSummatives::SummativeId)
                            .to(Summatives::Table, Summatives::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .from(StudentSummatives::Table, StudentSummatives::StudentId)
                            .to(Students::Table, Students::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // 评价 + 学生 唯一，成绩按此键 upsert
        manager
            .create_index(
                Index::create()
                    .name("idx_student_summatives_pair")
                    .table(StudentSummatives::Table)
                    .col(StudentSummatives::SummativeId)
                    .col(StudentSummatives::StudentId)
                    .unique()
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(StudentSummatives::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Summatives::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Subjects::Table).to_owned())
            .await?;
        Ok(())
    }
}

#[derive(DeriveIden)]
enum Subjects {
    Table,
    Id,
    SchoolAcademicYearId,
    TeacherId,
    Name,
    Code,
    PassingGrade,
    CreatedAt,
    UpdatedAt,
}

#[derive(DeriveIden)]
enum Summatives {
    Table,
    Id,
    SubjectId,
    Title,
    Description,
    AssessedAt,
    CreatedAt,
    UpdatedAt,
}

#[derive(DeriveIden)]
enum StudentSummatives {
    Table,
    Id,
    SummativeId,
    StudentId,
    Score,
    CreatedAt,
    UpdatedAt,
}

#[derive(DeriveIden)]
enum SchoolAcademicYears {
    Table,
    Id,
}

#[derive(DeriveIden)]
enum Teachers {
    Table,
    Id,
}

#[derive(DeriveIden)]
enum Students {
    Table,
    Id,
}
