use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // 创建学生表
        manager
            .create_table(
                Table::create()
                    .table(Student::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Student::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Student::FirstName).string_len(255).not_null())
                    .col(ColumnDef::new(Student::LastName).string_len(255).not_null())
                    .col(ColumnDef::new(Student::Year).integer().null())
                    .col(ColumnDef::new(Student::Gpa).double().null())
                    .to_owned(),
            )
            .await?;

        // 创建教师表
        manager
            .create_table(
                Table::create()
                    .table(Instructor::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Instructor::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(Instructor::FirstName)
                            .string_len(255)
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(Instructor::LastName)
                            .string_len(255)
                            .not_null(),
                    )
                    .col(ColumnDef::new(Instructor::HireDate).date().null())
                    .to_owned(),
            )
            .await?;

        // 创建课程表，instructor_id 可为空，外键使用数据库默认策略
        manager
            .create_table(
                Table::create()
                    .table(Course::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Course::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Course::Name).string_len(255).not_null())
                    .col(ColumnDef::new(Course::InstructorId).integer().null())
                    .col(ColumnDef::new(Course::Credits).integer().null())
                    .foreign_key(
                        ForeignKey::create()
                            .from(Course::Table, Course::InstructorId)
                            .to(Instructor::Table, Instructor::Id),
                    )
                    .to_owned(),
            )
            .await?;

        // 创建选课关联表，(student_id, course_id) 不设唯一约束
        manager
            .create_table(
                Table::create()
                    .table(StudentCourse::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(StudentCourse::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(StudentCourse::StudentId).integer().null())
                    .col(ColumnDef::new(StudentCourse::CourseId).integer().null())
                    .col(ColumnDef::new(StudentCourse::Grade).string_len(5).null())
                    .foreign_key(
                        ForeignKey::create()
                            .from(StudentCourse::Table, StudentCourse::StudentId)
                            .to(Student::Table, Student::Id),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .from(StudentCourse::Table, StudentCourse::CourseId)
                            .to(Course::Table, Course::Id),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_student_course_course_id")
                    .table(StudentCourse::Table)
                    .col(StudentCourse::CourseId)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(StudentCourse::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Course::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Instructor::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Student::Table).to_owned())
            .await?;
        Ok(())
    }
}

#[derive(DeriveIden)]
enum Student {
    #[sea_orm(iden = "student")]
    Table,
    Id,
    FirstName,
    LastName,
    Year,
    Gpa,
}

#[derive(DeriveIden)]
enum Instructor {
    #[sea_orm(iden = "instructor")]
    Table,
    Id,
    FirstName,
    LastName,
    HireDate,
}

#[derive(DeriveIden)]
enum Course {
    #[sea_orm(iden = "course")]
    Table,
    Id,
    Name,
    InstructorId,
    Credits,
}

#[derive(DeriveIden)]
enum StudentCourse {
    #[sea_orm(iden = "student_course")]
    Table,
    Id,
    StudentId,
    CourseId,
    Grade,
}
