//! The numbered console menus.
//!
//! One `App` owns both registries for the lifetime of the process. Every
//! prompt that asks for a book or member number means the positional
//! index shown in the most recent listing; those indices shift after a
//! deletion, so the menus re-print listings before asking.

use crate::input::{prompt_valid_email, prompt_valid_name, prompt_valid_password, read_line, read_number};
use crate::validation::capitalize_first_letter;
use anyhow::Context;
use bookstack_registry::{BookRegistry, MemberRegistry};
use bookstack_types::Book;
use std::io;
use tracing::{error, info};

/// The interactive application: both registries plus the menu loops.
pub struct App {
    books: BookRegistry,
    members: MemberRegistry,
}

impl App {
    /// Builds the app around already-constructed registries.
    #[must_use]
    pub fn new(books: BookRegistry, members: MemberRegistry) -> Self {
        Self { books, members }
    }

    /// Best-effort startup load: a missing or unreadable snapshot is
    /// logged and the app continues with whatever loaded.
    pub fn load(&mut self) {
        if let Err(e) = self.books.load() {
            error!("could not load book catalog: {e}");
        }
        if let Err(e) = self.members.load() {
            error!("could not load member registry: {e}");
        }
    }

    /// Runs the main menu until the user chooses Exit. Both registries
    /// are saved on the way out.
    pub fn run(&mut self) -> anyhow::Result<()> {
        loop {
            let option: u32 = read_number(
                "\nWelcome to the Personal Library Management System\n\n\
                 Please choose a number option:\n\
                 1. Login\n\
                 2. Register\n\
                 3. Exit\n\n",
            )?;
            match option {
                1 => self.login()?,
                2 => self.register()?,
                3 => {
                    println!("You chose to exit");
                    self.save()?;
                    return Ok(());
                }
                other => println!("Invalid option {other}\n"),
            }
        }
    }

    fn save(&self) -> anyhow::Result<()> {
        info!("saving registries");
        self.members.save().context("saving member registry")?;
        self.books.save().context("saving book catalog")?;
        Ok(())
    }

    fn login(&mut self) -> io::Result<()> {
        info!("login requested");
        let email = read_line("Enter your email: ")?;
        let password = read_line("Enter your password: ")?;

        let Some(person) = self.members.login(&email, &password) else {
            println!("Login failed\n");
            return Ok(());
        };
        println!("Login successful\n");
        let name = person.name.clone();
        let id = person.id;
        if person.is_admin() {
            self.admin_menu(&name)
        } else {
            self.member_menu(&name, id)
        }
    }

    fn register(&mut self) -> io::Result<()> {
        info!("registration requested");
        let id = self.members.len() as u32 + 1;
        let name = prompt_valid_name()?;
        let email = prompt_valid_email()?;
        let password = prompt_valid_password()?;
        let role = read_line("Enter your role: ")?;

        if self.members.register(id, &name, &email, &password, &role) {
            println!("Registration successful\nPlease login to continue\n");
        } else {
            println!("Registration failed\n");
        }
        Ok(())
    }

    // ── Member menu ──────────────────────────────────────────────

    fn member_menu(&mut self, name: &str, id: u32) -> io::Result<()> {
        loop {
            let option: u32 = read_number(&format!(
                "\nLogged in as: {name} {id}\n\
                 Please choose a number option:\n\
                 1. View Available Books\n\
                 2. Search Books\n\
                 3. Borrow Book\n\
                 4. Return Book\n\
                 5. View My Borrowed Books\n\
                 6. Logout\n\n"
            ))?;
            match option {
                1 => {
                    info!("view available books");
                    println!("{}", self.books.available_books());
                }
                2 => self.search_menu()?,
                3 => self.borrow_book()?,
                4 => self.return_book()?,
                5 => self.view_borrowed()?,
                6 => return Ok(()),
                _ => println!("Invalid option"),
            }
        }
    }

    fn search_menu(&mut self) -> io::Result<()> {
        info!("search books");
        loop {
            let option: u32 = read_number(
                "\nPlease choose a number option:\n\
                 1. Search by title\n\
                 2. Search by author\n\
                 3. Search by ISBN\n\
                 4. Return to previous menu\n\n",
            )?;
            let found = match option {
                1 => self.books.search_by_title(&read_line("Enter book title: ")?),
                2 => self.books.search_by_author(&read_line("Enter book author: ")?),
                3 => self.books.search_by_isbn(&read_line("Enter book ISBN: ")?),
                4 => return Ok(()),
                _ => {
                    println!("Invalid option");
                    continue;
                }
            };
            match found {
                Some(book) => println!("{book}"),
                None => println!("Book not found"),
            }
        }
    }

    fn borrow_book(&mut self) -> io::Result<()> {
        info!("borrow book");
        println!("{}", self.books.available_books());
        let book_index: usize = read_number("Enter book number (as listed): ")?;
        let member_index: usize = read_number("Enter member number (as listed): ")?;

        match self.books.entry_at_mut(book_index) {
            Some((key, book)) => {
                let outcome = self.members.borrow(member_index, key, book);
                println!("{outcome}\n");
            }
            None => println!("Book not found\n"),
        }
        Ok(())
    }

    fn return_book(&mut self) -> io::Result<()> {
        info!("return book");
        let member_index: usize = read_number("Enter member number (as listed): ")?;
        if self.members.find_by_index(member_index).is_none() {
            println!("Member not found\n");
            return Ok(());
        }
        println!("Books Currently Borrowed:");
        println!("{}", self.members.list_borrowed(member_index, &self.books));

        let book_index: usize = read_number("Enter the catalog number of the book to return: ")?;
        match self.books.entry_at_mut(book_index) {
            Some((key, book)) => {
                let outcome = self.members.return_book(member_index, key, book);
                println!("{outcome}\n");
            }
            None => println!("Book not found\n"),
        }
        Ok(())
    }

    fn view_borrowed(&mut self) -> io::Result<()> {
        info!("view borrowed books");
        let member_index: usize = read_number("Enter member number (as listed): ")?;
        println!("{}\n", self.members.list_borrowed(member_index, &self.books));
        Ok(())
    }

    // ── Administrator menu ───────────────────────────────────────

    fn admin_menu(&mut self, name: &str) -> io::Result<()> {
        loop {
            let option: u32 = read_number(&format!(
                "\nLogged in as: Admin {name}\n\
                 ADMINISTRATOR MENU\n\
                 1. View all books\n\
                 2. Add new book\n\
                 3. Update book menu\n\
                 4. Delete book\n\
                 5. View all members\n\
                 6. Add new member\n\
                 7. Update member details\n\
                 8. Delete member\n\
                 9. View borrowing records\n\
                 10. Logout\n\n"
            ))?;
            match option {
                1 => {
                    info!("view all books");
                    println!("{}", self.books.list_all());
                }
                2 => self.add_book()?,
                3 => self.update_book_menu()?,
                4 => self.delete_book()?,
                5 => {
                    info!("view all members");
                    println!("{}", self.members.list_all());
                }
                6 => self.add_member()?,
                7 => self.update_member()?,
                8 => self.delete_member()?,
                9 => {
                    info!("view borrowing records");
                    println!("{}", self.members.borrowed_summary(&self.books));
                }
                10 => return Ok(()),
                _ => println!("Invalid option"),
            }
        }
    }

    fn add_book(&mut self) -> io::Result<()> {
        info!("add new book");
        let id = self.books.len() as u32 + 1;
        let title = capitalize_first_letter(&read_line("Enter book title: ")?);
        let author = capitalize_first_letter(&read_line("Enter book author: ")?);
        let genre = capitalize_first_letter(&read_line("Enter book genre: ")?);
        let isbn = read_line("Enter book ISBN: ")?;
        let publication_year = read_line("Enter book publication year: ")?;
        let available_copies = read_number("Enter number of available copies: ")?;
        let total_copies = read_number("Enter number of total copies: ")?;

        let added = self.books.add(Book {
            id,
            title,
            author,
            genre,
            isbn,
            publication_year,
            available_copies,
            total_copies,
        });
        if added {
            println!("Book added successfully\n");
        } else {
            println!("Book not added\n");
        }
        Ok(())
    }

    fn update_book_menu(&mut self) -> io::Result<()> {
        info!("update book details");
        loop {
            println!("{}", self.books.list_all());
            let option: u32 = read_number(
                "\nPlease choose a number option:\n\
                 1. Update book title\n\
                 2. Update book ISBN\n\
                 3. Update number of available copies\n\
                 4. Update number of total copies\n\
                 5. Return to previous menu\n\n",
            )?;
            let updated = match option {
                1 => {
                    let index: usize = read_number("Enter book number: ")?;
                    let title = capitalize_first_letter(&read_line("Enter book title: ")?);
                    self.books.update_title(index, &title)
                }
                2 => {
                    let index: usize = read_number("Enter book number: ")?;
                    let isbn = read_line("Enter book ISBN: ")?;
                    self.books.update_isbn(index, &isbn)
                }
                3 => {
                    let index: usize = read_number("Enter book number: ")?;
                    let copies = read_number("Enter number of available copies: ")?;
                    self.books.update_available_copies(index, copies)
                }
                4 => {
                    let index: usize = read_number("Enter book number: ")?;
                    let copies = read_number("Enter number of total copies: ")?;
                    self.books.update_total_copies(index, copies)
                }
                5 => return Ok(()),
                _ => {
                    println!("Invalid option");
                    continue;
                }
            };
            if updated {
                println!("Book updated successfully\n");
            } else {
                println!("Book not updated\n");
            }
        }
    }

    fn delete_book(&mut self) -> io::Result<()> {
        info!("delete book");
        println!("{}", self.books.list_all());
        let index: usize = read_number("Enter book number: ")?;
        if self.books.delete_by_index(index).is_some() {
            println!("Book deleted successfully\n");
        } else {
            println!("Book not deleted\n");
        }
        Ok(())
    }

    fn add_member(&mut self) -> io::Result<()> {
        info!("add new member");
        let id = self.members.len() as u32 + 1;
        let name = prompt_valid_name()?;
        let email = prompt_valid_email()?;
        let password = prompt_valid_password()?;

        if self.members.register(id, &name, &email, &password, "member") {
            println!("Member added successfully\n");
        } else {
            println!("Member not added\n");
        }
        Ok(())
    }

    fn update_member(&mut self) -> io::Result<()> {
        info!("update member details");
        println!("{}", self.members.list_all());
        let index: usize = read_number("Enter member number: ")?;
        let name = prompt_valid_name()?;
        let email = prompt_valid_email()?;
        let password = prompt_valid_password()?;

        if self.members.update_member(index, &name, &email, &password) {
            println!("Member details updated successfully\n");
        } else {
            println!("Member details not updated\n");
        }
        Ok(())
    }

    fn delete_member(&mut self) -> io::Result<()> {
        info!("delete member");
        println!("{}", self.members.list_all());
        let index: usize = read_number("Enter member number: ")?;
        if self.members.delete_by_index(index).is_some() {
            println!("Member deleted successfully\n");
        } else {
            println!("Member not deleted\n");
        }
        Ok(())
    }
}
