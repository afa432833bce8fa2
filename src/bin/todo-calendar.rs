use chrono::NaiveDate;
use clap::{Parser, Subcommand};
use tokio::io::{AsyncBufReadExt, BufReader};

use todo_calendar::calendar::{CalendarGrid, ISO_DATE_FORMAT};
use todo_calendar::client::Client;
use todo_calendar::controller::feedback::{feedback_channel, CalendarEvent, FeedbackReceiver};
use todo_calendar::render::{draw, TextSurface};
use todo_calendar::{config, MonthCursor, Planner, TodoId};


#[derive(Parser, Debug)]
#[command(name = "todo-calendar")]
#[command(about = "Display a todo list on a month calendar")]
struct Args {
    #[command(subcommand)]
    command: Option<Command>,

    /// Base URL of the todo backend (defaults to $TODO_CALENDAR_API_URL, or http://localhost:8000)
    #[arg(long, global = true)]
    api_url: Option<String>,

    /// Month to display, as YYYY-MM (defaults to the current month)
    #[arg(long, global = true)]
    month: Option<MonthCursor>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Fetch the todos and display the month (default)
    Show,

    /// Fetch the todos and list them all
    List,

    /// Add a todo
    Add {
        text: String,

        /// Due date, as YYYY-MM-DD
        #[arg(short, long)]
        date: Option<NaiveDate>,
    },

    /// Delete a todo
    Delete {
        id: String,
    },

    /// Browse months interactively
    Browse,
}


#[tokio::main]
async fn main() {
    env_logger::init();

    let args = Args::parse();
    if let Some(url) = &args.api_url {
        config::set_api_url(url);
    }

    let client = match Client::from_config() {
        Ok(client) => client,
        Err(err) => {
            log::error!("Unable to create a client for {}: {}", config::api_url(), err);
            std::process::exit(2);
        }
    };
    log::info!("Using backend at {}", client.url());

    let reference = args.month.unwrap_or_default();
    let success = match args.command.unwrap_or(Command::Show) {
        Command::Show => {
            let planner = Planner::new(client, reference);
            let success = planner.refresh().await;
            print_grid(&planner.render());
            success
        },
        Command::List => {
            let planner = Planner::new(client, reference);
            let success = planner.refresh().await;
            todo_calendar::utils::print_todo_list(&planner.tasks());
            success
        },
        Command::Add{ text, date } => {
            let planner = Planner::new(client, reference);
            let date = date.map(|d| d.format(ISO_DATE_FORMAT).to_string());
            let success = planner.add_item(&text, date.as_deref()).await;
            print_grid(&planner.render());
            success
        },
        Command::Delete{ id } => {
            let planner = Planner::new(client, reference);
            let success = planner.delete_item(&TodoId::from(id.as_str())).await;
            print_grid(&planner.render());
            success
        },
        Command::Browse => {
            browse(client, reference).await;
            true
        },
    };

    if success == false {
        log::warn!("The operation did not complete, see the previous log lines for more info.");
        std::process::exit(1);
    }
}

fn print_grid(grid: &CalendarGrid) {
    let mut surface = TextSurface::new();
    draw(grid, &mut surface);
    print!("{}", surface.to_text());
}

/// Print every new rendering of the calendar
async fn print_redraws(mut receiver: FeedbackReceiver) {
    while receiver.changed().await.is_ok() {
        let event = receiver.borrow().clone();
        if let CalendarEvent::Redraw(grid) = event {
            println!();
            print_grid(&grid);
        }
    }
}

async fn browse(client: Client, reference: MonthCursor) {
    println!("Commands: n (next month), p (previous month), r (refresh), a <text>[||YYYY-MM-DD] (add), d <id> (delete), q (quit)");

    let (sender, receiver) = feedback_channel();
    let printer = tokio::spawn(print_redraws(receiver));
    let planner = Planner::new_with_feedback(client, reference, sender);
    planner.refresh().await;

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    loop {
        let line = match lines.next_line().await {
            Ok(Some(line)) => line,
            Ok(None) => break,
            Err(err) => {
                log::error!("Unable to read from stdin: {}", err);
                break;
            }
        };

        let line = line.trim();
        let (command, argument) = match line.split_once(' ') {
            Some((command, argument)) => (command, argument.trim()),
            None => (line, ""),
        };

        match command {
            "" => continue,
            "q" => break,
            "n" => { planner.next_month(); },
            "p" => { planner.previous_month(); },
            "r" => { planner.refresh().await; },
            "a" => {
                let new_todo = todo_calendar::content::parse_input(argument);
                planner.add_item(&new_todo.text, new_todo.date.as_deref()).await;
            },
            "d" => { planner.delete_item(&TodoId::from(argument)).await; },
            other => println!("Unknown command {:?}", other),
        }
    }

    // Dropping the planner closes the feedback channel
    drop(planner);
    let _ = printer.await;
}
