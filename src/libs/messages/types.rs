#[derive(Debug, Clone)]
pub enum Message {
    // === CONFIGURATION MESSAGES ===
    ConfigSaved,
    ConfigDeleted,
    ConfigApiUrl(String),
    InvalidApiUrl(String),
    PromptApiUrl,

    // === AUTH MESSAGES ===
    LoggedIn,
    LoggedOut,
    RegisteredPleaseLogIn,
    NotLoggedIn,
    SessionActive,
    SessionMissing,
    PromptUsername,
    PromptPassword,

    // === SERVER MESSAGES ===
    ServerHealthy(String),
    ServerUnreachable(String),

    // === BOOK MESSAGES ===
    BooksHeader,
    NoBooksFound,
    BookCreated,
    BookDeleted(i64),
    PromptBookName,
    PromptBookAuthor,
    PromptBookPublisher,
    PromptBookPages,
    PromptBookDescription,
    PromptNameFilter,
    PromptAuthorFilter,
    PromptPublisherFilter,
    SelectBookToDelete,

    // === TASK MESSAGES ===
    TasksHeader,
    NoTasksFound,
    TaskCreated,
    TaskDeleted(i64),
    TaskCompleted(i64),
    PromptTaskTitle,
    PromptTaskDescription,
    PromptTitleFilter,
    PromptStatusFilter,
    SelectTaskToDelete,
    SelectTaskToComplete,

    // === FILTER MESSAGES ===
    ActiveFilters(String),
    InvalidTaskStatus(String),
    InvalidSortOrder(String),

    // === SHELL MESSAGES ===
    SelectAction,
    NothingToSelect,
    Goodbye,
}
