pub mod requests;
pub mod responses;

pub use requests::{CreateQuestionRequest, QuizRequest, SearchRequest};
pub use responses::{
    CategoriesResponse, CreatedResponse, DeletedResponse, QuestionListResponse,
    QuestionPageResponse, QuizResponse,
};
