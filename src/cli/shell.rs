//! Interactive menu shell
//!
//! Thin wrapper over the services: reads menu choices and field values,
//! calls into the core, prints results. Typing the escape word at a field
//! prompt abandons the current operation and returns to the menu.

use std::io::{self, Write};

use crate::{
    config::ShellConfig,
    models::{tool::CreateTool, usage::CreateUsage},
    services::Services,
};

pub struct Shell {
    services: Services,
    config: ShellConfig,
    running: bool,
}

impl Shell {
    pub fn new(services: Services, config: ShellConfig) -> Self {
        Self {
            services,
            config,
            running: true,
        }
    }

    /// Run the menu loop until the user exits
    pub fn run(&mut self) -> io::Result<()> {
        println!("Welcome to the Toolcrib Inventory System!");
        while self.running {
            self.print_menu();
            let choice = read_line("Select an option: ")?;
            if choice.eq_ignore_ascii_case(&self.config.escape_word) {
                self.stop();
                continue;
            }
            match choice.as_str() {
                "1" => self.add_tool()?,
                "2" => self.remove_tool()?,
                "3" => self.track_usage()?,
                "4" => self.schedule_maintenance()?,
                "5" => self.list_tools(),
                "6" => self.stop(),
                "" => {}
                _ => println!("Invalid choice. Please try again."),
            }
        }
        println!("Exiting the Toolcrib Inventory System. Goodbye!");
        Ok(())
    }

    fn stop(&mut self) {
        self.running = false;
    }

    fn print_menu(&self) {
        println!();
        println!("Toolcrib Inventory Menu:");
        println!("1. Add Tool");
        println!("2. Remove Tool");
        println!("3. Track Tool Usage");
        println!("4. Schedule Maintenance");
        println!("5. List Tools");
        println!("6. Exit");
        println!(
            "Type \"{}\" at any prompt to abandon the current operation.",
            self.config.escape_word
        );
    }

    /// Prompt for one field; `None` means the user typed the escape word
    fn prompt(&self, label: &str) -> io::Result<Option<String>> {
        let input = read_line(label)?;
        if input.eq_ignore_ascii_case(&self.config.escape_word) {
            println!("Operation abandoned.");
            return Ok(None);
        }
        Ok(Some(input))
    }

    fn add_tool(&self) -> io::Result<()> {
        let Some(name) = self.prompt("Enter tool name: ")? else {
            return Ok(());
        };
        let Some(category) = self.prompt("Enter tool category: ")? else {
            return Ok(());
        };
        let Some(serial_number) = self.prompt("Enter tool serial number: ")? else {
            return Ok(());
        };
        let Some(purchase_date) = self.prompt("Enter purchase date (YYYY-MM-DD): ")? else {
            return Ok(());
        };
        let Some(condition) = self.prompt("Enter tool condition: ")? else {
            return Ok(());
        };

        let data = CreateTool {
            name,
            category,
            serial_number,
            purchase_date,
            condition,
        };
        match self.services.registry.add(&data) {
            Ok(tool) => println!("Tool added successfully with ID: {}", tool.id),
            Err(e) => println!("{}", e),
        }
        Ok(())
    }

    fn remove_tool(&self) -> io::Result<()> {
        let Some(identifier) = self.prompt("Enter tool ID or name to remove: ")? else {
            return Ok(());
        };
        match self.services.registry.remove(&identifier) {
            Ok(tool) => println!("Tool with ID {} has been removed.", tool.id),
            Err(e) => println!("{}", e),
        }
        Ok(())
    }

    fn track_usage(&self) -> io::Result<()> {
        let Some(identifier) = self.prompt("Enter tool ID or name: ")? else {
            return Ok(());
        };
        let Some(user) = self.prompt("Enter user name: ")? else {
            return Ok(());
        };
        let Some(checkout_time) = self.prompt("Enter checkout time (YYYY-MM-DD HH:MM): ")? else {
            return Ok(());
        };
        let Some(expected_return_time) =
            self.prompt("Enter expected return time (YYYY-MM-DD HH:MM): ")?
        else {
            return Ok(());
        };

        let data = CreateUsage {
            user,
            checkout_time,
            expected_return_time,
        };
        match self.services.ledger.record(&identifier, &data) {
            Ok(record) => println!("Tool usage logged: {}", render_json(&record)),
            Err(e) => println!("{}", e),
        }
        Ok(())
    }

    fn schedule_maintenance(&self) -> io::Result<()> {
        let Some(identifier) = self.prompt("Enter tool ID or name: ")? else {
            return Ok(());
        };
        let Some(maintenance_type) = self.prompt("Enter maintenance type: ")? else {
            return Ok(());
        };
        let Some(scheduled_date) = self.prompt("Enter scheduled date (YYYY-MM-DD): ")? else {
            return Ok(());
        };

        match self
            .services
            .maintenance
            .schedule(&identifier, &maintenance_type, &scheduled_date)
        {
            Ok(record) => println!("Maintenance scheduled: {}", render_json(&record)),
            Err(e) => println!("{}", e),
        }
        Ok(())
    }

    fn list_tools(&self) {
        match self.services.registry.list() {
            Ok(tools) if tools.is_empty() => println!("No tools found."),
            Ok(tools) => {
                println!("Listing all tools:");
                for tool in tools {
                    println!(
                        "ID: {}, Name: {}, Category: {}, Condition: {}",
                        tool.id, tool.name, tool.category, tool.condition
                    );
                }
            }
            Err(e) => println!("{}", e),
        }
    }
}

/// Print a prompt and read one trimmed line from stdin
fn read_line(label: &str) -> io::Result<String> {
    print!("{}", label);
    io::stdout().flush()?;

    let mut input = String::new();
    io::stdin().read_line(&mut input)?;
    Ok(input.trim().to_string())
}

fn render_json<T: serde::Serialize + std::fmt::Debug>(value: &T) -> String {
    serde_json::to_string(value).unwrap_or_else(|_| format!("{:?}", value))
}
