use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // 创建学校表
        manager
            .create_table(
                Table::create()
                    .table(Schools::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Schools::Id)
                            .string()
                            .not_null()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(Schools::Npsn)
                            .string()
                            .not_null()
                            .unique_key(),
                    )
                    .col(ColumnDef::new(Schools::Name).string().not_null())
                    .col(ColumnDef::new(Schools::Level).string().not_null())
                    .col(ColumnDef::new(Schools::Address).text().null())
                    .col(ColumnDef::new(Schools::Phone).string().null())
                    .col(ColumnDef::new(Schools::Email).string().null())
                    .col(ColumnDef::new(Schools::HeadmasterName).string().null())
                    .col(ColumnDef::new(Schools::CreatedAt).big_integer().not_null())
                    .col(ColumnDef::new(Schools::UpdatedAt).big_integer().not_null())
                    .to_owned(),
            )
            .await?;

        // 创建学年表
        manager
            .create_table(
                Table::create()
                    .table(AcademicYears::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(AcademicYears::Id)
                            .string()
                            .not_null()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(AcademicYears::Name).string().not_null())
                    .col(ColumnDef::new(AcademicYears::Semester).string().not_null())
                    .col(
                        ColumnDef::new(AcademicYears::CreatedAt)
                            .big_integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(AcademicYears::UpdatedAt)
                            .big_integer()
                            .not_null(),
                    )
                    .to_owned(),
            )
            .await?;

        // 学年名 + 学期 唯一
        manager
            .create_index(
                Index::create()
                    .name("idx_academic_years_name_semester")
                    .table(AcademicYears::Table)
                    .col(AcademicYears::Name)
                    .col(AcademicYears::Semester)
                    .unique()
                    .to_owned(),
            )
            .await?;

        // 创建学校学年关联表
        manager
            .create_table(
                Table::create()
                    .table(SchoolAcademicYears::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(SchoolAcademicYears::Id)
                            .string()
                            .not_null()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(SchoolAcademicYears::SchoolId)
                            .string()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(SchoolAcademicYears::AcademicYearId)
                            .string()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(SchoolAcademicYears::Active)
                            .boolean()
                            .not_null()
                            .default(false),
                    )
                    .col(
                        ColumnDef::new(SchoolAcademicYears::CreatedAt)
                            .big_integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(SchoolAcademicYears::UpdatedAt)
                            .big_integer()
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .from(SchoolAcademicYears::Table, SchoolAcademicYears::SchoolId)
                            .to(Schools::Table, Schools::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .from(
                                SchoolAcademicYears::Table,
                                SchoolAcademicYears::AcademicYearId,
                            )
                            .to(AcademicYears::Table, AcademicYears::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // 学校 + 学年 唯一
        manager
            .create_index(
                Index::create()
                    .name("idx_school_academic_years_school_year")
                    .table(SchoolAcademicYears::Table)
                    .col(SchoolAcademicYears::SchoolId)
                    .col(SchoolAcademicYears::AcademicYearId)
                    .unique()
                    .to_owned(),
            )
            .await?;

        // 创建教师表
        manager
            .create_table(
                Table::create()
                    .table(Teachers::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Teachers::Id)
                            .string()
                            .not_null()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(Teachers::SchoolAcademicYearId)
                            .string()
                            .not_null(),
                    )
                    .col(ColumnDef::new(Teachers::Niy).string().not_null())
                    .col(ColumnDef::new(Teachers::Name).string().not_null())
                    .col(ColumnDef::new(Teachers::Gender).string().not_null())
                    .col(ColumnDef::new(Teachers::Phone).string().null())
                    .col(ColumnDef::new(Teachers::Email).string().null())
                    .col(
                        ColumnDef::new(Teachers::CreatedAt)
                            .big_integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(Teachers::UpdatedAt)
                            .big_integer()
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .from(Teachers::Table, Teachers::SchoolAcademicYearId)
                            .to(SchoolAcademicYears::Table, SchoolAcademicYears::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // 同一学校学年内 NIY 唯一
        manager
            .create_index(
                Index::create()
                    .name("idx_teachers_scope_niy")
                    .table(Teachers::Table)
                    .col(Teachers::SchoolAcademicYearId)
                    .col(Teachers::Niy)
                    .unique()
                    .to_owned(),
            )
            .await?;

        // 创建班级表
        manager
            .create_table(
                Table::create()
                    .table(Classrooms::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Classrooms::Id)
                            .string()
                            .not_null()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(Classrooms::SchoolAcademicYearId)
                            .string()
                            .not_null(),
                    )
                    .col(ColumnDef::new(Classrooms::Name).string().not_null())
                    .col(
                        ColumnDef::new(Classrooms::GradeLevel)
                            .integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(Classrooms::HomeroomTeacherId)
                            .string()
                            .null(),
                    )
                    .col(
                        ColumnDef::new(Classrooms::CreatedAt)
                            .big_integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(Classrooms::UpdatedAt)
                            .big_integer()
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .from(Classrooms::Table, Classrooms::SchoolAcademicYearId)
                            .to(SchoolAcademicYears::Table, SchoolAcademicYears::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .from(Classrooms::Table, Classrooms::HomeroomTeacherId)
                            .to(Teachers::Table, Teachers::Id)
                            .on_delete(ForeignKeyAction::SetNull),
                    )
                    .to_owned(),
            )
            .await?;

        // 同一学校学年内班级名唯一
        manager
            .create_index(
                Index::create()
                    .name("idx_classrooms_scope_name")
                    .table(Classrooms::Table)
                    .col(Classrooms::SchoolAcademicYearId)
                    .col(Classrooms::Name)
                    .unique()
                    .to_owned(),
            )
            .await?;

        // 创建学生表
        manager
            .create_table(
                Table::create()
                    .table(Students::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Students::Id)
                            .string()
                            .not_null()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(Students::SchoolAcademicYearId)
                            .string()
                            .not_null(),
                    )
                    .col(ColumnDef::new(Students::Nisn).string().not_null())
                    .col(ColumnDef::new(Students::Name).string().not_null())
                    .col(ColumnDef::new(Students::Gender).string().not_null())
                    .col(ColumnDef::new(Students::BirthPlace).string().null())
                    .col(ColumnDef::new(Students::BirthDate).string().null())
                    .col(ColumnDef::new(Students::Religion).string().null())
                    .col(ColumnDef::new(Students::Address).text().null())
                    .col(
                        ColumnDef::new(Students::CreatedAt)
                            .big_integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(Students::UpdatedAt)
                            .big_integer()
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .from(Students::Table, Students::SchoolAcademicYearId)
                            .to(SchoolAcademicYears::Table, SchoolAcademicYears::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // 同一学校学年内 NISN 唯一
        manager
            .create_index(
                Index::create()
                    .name("idx_students_scope_nisn")
                    .table(Students::Table)
                    .col(Students::SchoolAcademicYearId)
                    .col(Students::Nisn)
                    .unique()
                    .to_owned(),
            )
            .await?;

        // 创建学生家长表
        manager
            .create_table(
                Table::create()
                    .table(StudentParents::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(StudentParents::Id)
                            .string()
                            .not_null()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(StudentParents::StudentId)
                            .string()
                            .not_null()
                            .unique_key(),
                    )
                    .col(ColumnDef::new(StudentParents::FatherName).string().null())
                    .col(
                        ColumnDef::new(StudentParents::FatherOccupation)
                            .string()
                            .null(),
                    )
                    .col(ColumnDef::new(StudentParents::MotherName).string().null())
                    .col(
                        ColumnDef::new(StudentParents::MotherOccupation)
                            .string()
                            .null(),
                    )
                    .col(ColumnDef::new(StudentParents::Phone).string().null())
                    .col(ColumnDef::new(StudentParents::Address).text().null())
                    .col(
                        ColumnDef::new(StudentParents::CreatedAt)
                            .big_integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(StudentParents::UpdatedAt)
                            .big_integer()
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .from(StudentParents::Table, StudentParents::StudentId)
                            .to(Students::Table, Students::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // 创建学生监护人表
        manager
            .create_table(
                Table::create()
                    .table(StudentGuardians::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(StudentGuardians::Id)
                            .string()
                            .not_null()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(StudentGuardians::StudentId)
                            .string()
                            .not_null()
                            .unique_key(),
                    )
                    .col(ColumnDef::new(StudentGuardians::Name).string().not_null())
                    .col(
                        ColumnDef::new(StudentGuardians::Occupation)
                            .string()
                            .null(),
                    )
                    .col(
                        ColumnDef::new(StudentGuardians::Relationship)
                            .string()
                            .null(),
                    )
                    .col(ColumnDef::new(StudentGuardians::Phone).string().null())
                    .col(ColumnDef::new(StudentGuardians::Address).text().null())
                    .col(
                        ColumnDef::new(StudentGuardians::CreatedAt)
                            .big_integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(StudentGuardians::UpdatedAt)
                            .big_integer()
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .from(StudentGuardians::Table, StudentGuardians::StudentId)
                            .to(Students::Table, Students::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // 创建班级学生关联表
        manager
            .create_table(
                Table::create()
                    .table(ClassroomStudents::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(ClassroomStudents::Id)
                            .string()
                            .not_null()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(ClassroomStudents::ClassroomId)
                            .string()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(ClassroomStudents::StudentId)
                            .string()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(ClassroomStudents::CreatedAt)
                            .big_integer()
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .from(ClassroomStudents::Table, ClassroomStudents::ClassroomId)
                            .to(Classrooms::Table, Classrooms::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .from(ClassroomStudents::Table, ClassroomStudents::StudentId)
                            .to(Students::Table, Students::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // 班级 + 学生 唯一
        manager
            .create_index(
                Index::create()
                    .name("idx_classroom_students_pair")
                    .table(ClassroomStudents::Table)
                    .col(ClassroomStudents::ClassroomId)
                    .col(ClassroomStudents::StudentId)
                    .unique()
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(ClassroomStudents::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(StudentGuardians::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(StudentParents::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Students::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Classrooms::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Teachers::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(SchoolAcademicYears::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(AcademicYears::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Schools::Table).to_owned())
            .await?;
        Ok(())
    }
}

#[derive(DeriveIden)]
enum Schools {
    Table,
    Id,
    Npsn,
    Name,
    Level,
    Address,
    Phone,
    Email,
    HeadmasterName,
    CreatedAt,
    UpdatedAt,
}

#[derive(DeriveIden)]
enum AcademicYears {
    Table,
    Id,
    Name,
    Semester,
    CreatedAt,
    UpdatedAt,
}

#[derive(DeriveIden)]
enum SchoolAcademicYears {
    Table,
    Id,
    SchoolId,
    AcademicYearId,
    Active,
    CreatedAt,
    UpdatedAt,
}

#[derive(DeriveIden)]
enum Teachers {
    Table,
    Id,
    SchoolAcademicYearId,
    Niy,
    Name,
    Gender,
    Phone,
    Email,
    CreatedAt,
    UpdatedAt,
}

#[derive(DeriveIden)]
enum Classrooms {
    Table,
    Id,
    SchoolAcademicYearId,
    Name,
    GradeLevel,
    HomeroomTeacherId,
    CreatedAt,
    UpdatedAt,
}

#[derive(DeriveIden)]
enum Students {
    Table,
    Id,
    SchoolAcademicYearId,
    Nisn,
    Name,
    Gender,
    BirthPlace,
    BirthDate,
    Religion,
    Address,
    CreatedAt,
    UpdatedAt,
}

#[derive(DeriveIden)]
enum StudentParents {
    Table,
    Id,
    StudentId,
    FatherName,
    FatherOccupation,
    MotherName,
    MotherOccupation,
    Phone,
    Address,
    CreatedAt,
    UpdatedAt,
}

#[derive(DeriveIden)]
enum StudentGuardians {
    Table,
    Id,
    StudentId,
    Name,
    Occupation,
    Relationship,
    Phone,
    Address,
    CreatedAt,
    UpdatedAt,
}

#[derive(DeriveIden)]
enum ClassroomStudents {
    Table,
    Id,
    ClassroomId,
    StudentId,
    CreatedAt,
}
