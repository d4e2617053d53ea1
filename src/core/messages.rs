use serde::{Deserialize, Serialize};

// Locale selects the command words and console messages.
#[derive(Debug, PartialEq, Eq, Clone, Copy, Serialize, Deserialize)]
pub enum Locale {
    Ru,
    En,
}

impl Locale {
    pub fn parse(s: &str) -> Option<Locale> {
        match s.trim().to_lowercase().as_str() {
            "ru" => Some(Locale::Ru),
            "en" => Some(Locale::En),
            _ => None,
        }
    }

    pub fn messages(&self) -> &'static Messages {
        match self {
            Locale::Ru => &RU,
            Locale::En => &EN,
        }
    }
}

/// Command words and console texts for one locale. Command words are lowercase.
#[derive(Debug, PartialEq)]
pub struct Messages {
    pub cmd_add: &'static str,
    pub cmd_delete: &'static str,
    pub cmd_catalog: &'static str,
    pub cmd_status: &'static str,
    pub cmd_save: &'static str,
    pub cmd_search: &'static str,
    pub cmd_help: &'static str,
    pub cmd_quit: &'static str,

    pub prompt: &'static str,
    pub path_request: &'static str,
    pub library_created: &'static str,
    pub open_success: &'static str,
    pub open_error: &'static str,
    pub bad_file: &'static str,

    pub title_input: &'static str,
    pub author_input: &'static str,
    pub year_input: &'static str,
    pub id_input: &'static str,
    pub status_input: &'static str,
    pub file_input: &'static str,

    pub book_added: &'static str,
    pub book_deleted: &'static str,
    pub book_not_found: &'static str,
    pub status_set: &'static str,
    pub bad_status: &'static str,
    pub found: &'static str,
    pub not_found: &'static str,
    pub interrupted: &'static str,
    pub save_success: &'static str,
    pub save_error: &'static str,
    pub bad_command: &'static str,
    pub help: &'static str,
    pub quit: &'static str,
}

pub static RU: Messages = Messages {
    cmd_add: "добавить",
    cmd_delete: "удалить",
    cmd_catalog: "каталог",
    cmd_status: "статус",
    cmd_save: "сохранить",
    cmd_search: "поиск",
    cmd_help: "помощь",
    cmd_quit: "выход",

    prompt: ">",
    path_request: "Введите путь к файлу с каталогом книг (если файл не существует, он будет создан):",
    library_created: "Создана новая библиотека.",
    open_success: "успешно открыт, данные загружены.",
    open_error: "Не удалось открыть файл, проверьте путь и перезапустите программу",
    bad_file: "Некорректный формат файла:",

    title_input: "Название: >",
    author_input: "Автор: >",
    year_input: "Год: >",
    id_input: "ID книги: >",
    status_input: "Статус (0 - выдана / 1 - в наличии): >",
    file_input: "Путь к файлу: >",

    book_added: "Добавлена книга:",
    book_deleted: "Удалена книга:",
    book_not_found: "Книга с данным идентификатором не найдена",
    status_set: "Статус изменен:",
    bad_status: "Неверный статус",
    found: "Результаты поиска:",
    not_found: "Таких книг не найдено",
    interrupted: "Пустой ввод, процедура прервана",
    save_success: "Данные успешно сохранены.",
    save_error: "Не удалось сохранить в файл",
    bad_command: "Неверная команда, воспользуйтесь командой <ПОМОЩЬ> для справки",
    help: "Доступные команды:\n\
           ВЫХОД - выход из программы\n\
           ДОБАВИТЬ - добавление книги\n\
           УДАЛИТЬ - удаление книги из библиотеки\n\
           КАТАЛОГ - выводит список книг библиотеки\n\
           ПОИСК - поиск книги в библиотеке\n\
           ПОМОЩЬ - вывод этого сообщения\n\
           СТАТУС - изменение статуса книги\n\
           СОХРАНИТЬ - сохранить в файл",
    quit: "Спасибо за пользование библиотекой!",
};

pub static EN: Messages = Messages {
    cmd_add: "add",
    cmd_delete: "delete",
    cmd_catalog: "catalog",
    cmd_status: "status",
    cmd_save: "save",
    cmd_search: "search",
    cmd_help: "help",
    cmd_quit: "quit",

    prompt: ">",
    path_request: "Enter the path to the book catalog file (if the file does not exist, it will be created):",
    library_created: "New library created.",
    open_success: "opened, data loaded.",
    open_error: "Could not open the file, check the path and restart the program",
    bad_file: "Invalid file format:",

    title_input: "Title: >",
    author_input: "Author: >",
    year_input: "Year: >",
    id_input: "Book ID: >",
    status_input: "Status (0 - checked out / 1 - in stock): >",
    file_input: "File path: >",

    book_added: "Book added:",
    book_deleted: "Book deleted:",
    book_not_found: "No book with this ID was found",
    status_set: "Status changed:",
    bad_status: "Invalid status",
    found: "Search results:",
    not_found: "No such books found",
    interrupted: "Empty input, operation interrupted",
    save_success: "Data saved successfully.",
    save_error: "Could not save to file",
    bad_command: "Unknown command, use <HELP> for the command list",
    help: "Available commands:\n\
           QUIT - exit the program\n\
           ADD - add a book\n\
           DELETE - remove a book from the library\n\
           CATALOG - list the library's books\n\
           SEARCH - search for a book in the library\n\
           HELP - show this message\n\
           STATUS - change a book's status\n\
           SAVE - save to a file",
    quit: "Thank you for using the library!",
};
