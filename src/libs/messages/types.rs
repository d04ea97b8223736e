#[derive(Debug, Clone)]
pub enum Message {
    // === MENU MESSAGES ===
    GradeMenuTitle,
    GradeMenuItems,
    InvalidMenuChoice,
    ExitingProgram,
    PromptMenuChoice,

    // === STUDENT MESSAGES ===
    PromptStudentName,
    InvalidStudentName,
    StudentAlreadyExists,
    StudentAdded(String),
    InvalidStudentNameInput,
    StudentNotFound,
    NoStudentsAdded,

    // === GRADE MESSAGES ===
    PromptGrade,
    GradeNotANumber,
    GradeOutOfRange,
    GradesRecorded(String, usize), // student, count

    // === REPORT MESSAGES ===
    NoStudents,
    NoGrades,
    NoStudentsWithGrades,
    StudentAverage(String, f64),
    ReportSeparator,
    MaxAverage(f64),
    MinAverage(f64),
    OverallAverage(f64),
    TopStudent(String, f64),

    // === PROFILE MESSAGES ===
    PromptUserName,
    PromptBirthYear,
    InvalidBirthYear,
    PromptHobby,
    ProfileSummaryHeader,
    ProfileDetails { name: String, age: i32, stage: String },
    FavoriteHobbiesHeader(usize),
    HobbyItem(String),
    NoHobbies,

    // === BOOK MESSAGES ===
    BookNotFound,
    BookDeleted,
    BooksNotFound,
    BooksHeader,
    BookServerStarted(String), // address
    BookServerStopped,

    // === CONFIGURATION MESSAGES ===
    ConfigSaved,
    ConfigModuleServer,
    PromptServerHost,
    PromptServerPort,

    // === DATABASE MESSAGES ===
    DbQueryFailed,

    // === MIGRATION MESSAGES ===
    MigrationsFound(usize),        // count
    RunningMigration(u32, String), // version, name
    MigrationCompleted(u32),       // version
    MigrationFailed(u32, String),  // version, error
    AllMigrationsCompleted,
    DatabaseUpToDate,

    // === GENERAL MESSAGES ===
    InputCancelled,
    InputExhausted,
}
