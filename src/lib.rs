pub mod core {
    pub mod command;
    pub mod controller;
    pub mod domain;
    pub mod library;
    pub mod messages;
    pub mod repository;
}

pub mod books {
    pub mod domain;
    pub mod dto;
}

pub mod catalog {
    pub mod command {
        pub mod add_book_cmd;
        pub mod list_books_cmd;
        pub mod load_catalog_cmd;
        pub mod remove_book_cmd;
        pub mod save_catalog_cmd;
        pub mod search_books_cmd;
        pub mod update_status_cmd;
    }
    pub mod controller;
    pub mod domain;
    pub mod factory;
    pub mod repository;
    pub mod shell;
}

pub mod gateway;

pub mod utils {
    pub mod logs;
}
