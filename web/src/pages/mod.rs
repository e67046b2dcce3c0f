pub(crate) use chat::ChatPage;
pub(crate) use flowers::FlowerCover;
pub(crate) use landing::LandingPage;
pub(crate) use loading::LoadingPage;
pub(crate) use next_chapter::NextChapter;
pub(crate) use sudoku::SudokuPage;

mod chat;
mod flowers;
mod landing;
mod loading;
mod next_chapter;
mod sudoku;
