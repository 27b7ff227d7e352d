//! Interactive console menu.
//!
//! The menu reads one answer per line. End of input behaves like choosing
//! "quit", so scripted sessions terminate cleanly.

use std::io::{BufRead, Write};

use anyhow::Result;

use flightplan_lib::lookup::normalize_iata;
use flightplan_lib::{find_route, Criterion, RouteId, RouteSummary, SortAlgorithm, SortKey};

use crate::commands::search::{search, SearchKind};
use crate::commands::{OutputOptions, Session};
use crate::output::{write_flights, write_route, write_routes, OutputFormat};
use crate::terminal::{Palette, Style};

/// Console state: the session plus the line-based input and output streams.
pub struct Menu<'s, R, W> {
    session: &'s mut Session,
    input: R,
    out: W,
    palette: Palette,
}

enum Flow {
    Continue,
    Quit,
}

impl<'s, R: BufRead, W: Write> Menu<'s, R, W> {
    pub fn new(session: &'s mut Session, input: R, out: W, palette: Palette) -> Self {
        Self {
            session,
            input,
            out,
            palette,
        }
    }

    /// Run until the user quits or input ends.
    pub fn run(mut self) -> Result<()> {
        loop {
            self.print_main_menu()?;
            let Some(choice) = self.read_line()? else {
                break;
            };
            let flow = match choice.as_str() {
                "1" => self.plan_route()?,
                "2" => self.sort_routes()?,
                "3" => self.search_flights()?,
                "4" => self.save_routes()?,
                "5" | "q" | "quit" => Flow::Quit,
                _ => {
                    self.error("Invalid choice, please enter 1-5.")?;
                    Flow::Continue
                }
            };
            if matches!(flow, Flow::Quit) {
                break;
            }
        }
        writeln!(self.out, "\nGoodbye!")?;
        Ok(())
    }

    fn options(&self) -> OutputOptions {
        OutputOptions {
            format: OutputFormat::Text,
            palette: self.palette,
        }
    }

    fn read_line(&mut self) -> Result<Option<String>> {
        self.out.flush()?;
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim().to_string()))
    }

    /// Print `question` and read the answer; `None` at end of input.
    fn prompt(&mut self, question: &str) -> Result<Option<String>> {
        write!(self.out, "{question}")?;
        self.read_line()
    }

    fn error(&mut self, message: &str) -> Result<()> {
        writeln!(self.out, "{}", self.palette.paint(Style::Problem, message))?;
        Ok(())
    }

    fn print_main_menu(&mut self) -> Result<()> {
        writeln!(self.out)?;
        writeln!(
            self.out,
            "{}",
            self.palette.paint(Style::Heading, "=== FLIGHT ROUTE PLANNER ===")
        )?;
        writeln!(self.out, "1. Plan a route")?;
        writeln!(self.out, "2. Sort routes")?;
        writeln!(self.out, "3. Search flights")?;
        writeln!(self.out, "4. Save routes")?;
        writeln!(self.out, "5. Quit")?;
        write!(self.out, "Your choice: ")?;
        Ok(())
    }

    fn airport_prompt(&mut self, question: &str) -> Result<Option<String>> {
        let Some(answer) = self.prompt(question)? else {
            return Ok(None);
        };
        let code = normalize_iata(&answer);
        if !self.session.network.has_airport(&code) {
            self.error(&format!("Airport {code} not found."))?;
            return Ok(None);
        }
        Ok(Some(code))
    }

    fn plan_route(&mut self) -> Result<Flow> {
        writeln!(self.out, "\n--- ROUTE PLANNING ---")?;
        let Some(origin) = self.airport_prompt("Origin (IATA code, e.g. VIE): ")? else {
            return Ok(Flow::Continue);
        };
        let Some(destination) = self.airport_prompt("Destination (IATA code, e.g. JFK): ")?
        else {
            return Ok(Flow::Continue);
        };

        writeln!(self.out, "\nChoose a criterion:")?;
        writeln!(self.out, "1. Cheapest route")?;
        writeln!(self.out, "2. Slowest route")?;
        writeln!(self.out, "3. Fastest route")?;
        writeln!(self.out, "4. Fewest stopovers")?;
        let Some(answer) = self.prompt("Your choice: ")? else {
            return Ok(Flow::Continue);
        };
        let criterion = match answer.as_str() {
            "1" => Criterion::Cheapest,
            "2" => Criterion::Slowest,
            "3" => Criterion::Fastest,
            "4" => Criterion::FewestStopovers,
            other => match other.parse::<Criterion>() {
                Ok(criterion) => criterion,
                Err(_) => {
                    self.error("Invalid criterion.")?;
                    return Ok(Flow::Continue);
                }
            },
        };

        let Some(route) = find_route(&self.session.network, &origin, &destination, criterion) else {
            self.error(&format!("\nNo route found from {origin} to {destination}."))?;
            return Ok(Flow::Continue);
        };
        let stored = self.session.book.add(&route).clone();
        let summary = RouteSummary::from_route(&self.session.network, &stored, Some(criterion))?;

        writeln!(self.out)?;
        let options = self.options();
        write_route(&mut self.out, &summary, options.format, &options.palette)?;
        writeln!(self.out, "{stored}")?;
        Ok(Flow::Continue)
    }

    fn parse_ids(&mut self, answer: &str) -> Result<Option<Vec<RouteId>>> {
        let mut ids = Vec::new();
        for part in answer.split(',') {
            let Ok(id) = part.trim().parse::<RouteId>() else {
                self.error("Invalid format, expected ids such as 1,2,3.")?;
                return Ok(None);
            };
            if ids.contains(&id) {
                writeln!(self.out, "Route {id} was already selected.")?;
            } else if self.session.book.get(id).is_none() {
                writeln!(self.out, "Route {id} not found.")?;
            } else {
                ids.push(id);
            }
        }
        Ok(Some(ids))
    }

    fn sort_routes(&mut self) -> Result<Flow> {
        writeln!(self.out, "\n--- SORTING ---")?;
        if self.session.book.is_empty() {
            self.error("No routes yet. Plan a route first.")?;
            return Ok(Flow::Continue);
        }

        writeln!(self.out, "\nAvailable routes:")?;
        for route in self.session.book.routes() {
            writeln!(self.out, "{route}")?;
        }
        let Some(answer) = self.prompt("\nRoute ids to sort (comma separated, e.g. 1,2,3): ")?
        else {
            return Ok(Flow::Continue);
        };
        let Some(ids) = self.parse_ids(&answer)? else {
            return Ok(Flow::Continue);
        };
        if ids.is_empty() {
            self.error("No valid routes to sort.")?;
            return Ok(Flow::Continue);
        }

        writeln!(self.out, "\nChoose a sorting algorithm:")?;
        writeln!(self.out, "1. Merge sort (stable)")?;
        writeln!(self.out, "2. Quick sort (unstable)")?;
        let Some(answer) = self.prompt("Your choice: ")? else {
            return Ok(Flow::Continue);
        };
        let algorithm = match answer.as_str() {
            "1" => SortAlgorithm::Merge,
            "2" => SortAlgorithm::Quick,
            _ => {
                self.error("Invalid algorithm choice.")?;
                return Ok(Flow::Continue);
            }
        };

        writeln!(self.out, "\nChoose a sort key:")?;
        writeln!(self.out, "1. Price (ascending)")?;
        writeln!(self.out, "2. Duration (ascending)")?;
        writeln!(self.out, "3. Stopovers (ascending)")?;
        writeln!(self.out, "4. Combined (price, duration, stopovers)")?;
        let Some(answer) = self.prompt("Your choice: ")? else {
            return Ok(Flow::Continue);
        };
        let key = match answer.as_str() {
            "1" => SortKey::Price,
            "2" => SortKey::Duration,
            "3" => SortKey::Stopovers,
            "4" => SortKey::Combined,
            _ => {
                self.error("Invalid sort key choice.")?;
                return Ok(Flow::Continue);
            }
        };

        let mut routes = self.session.book.select(&ids)?;
        algorithm.sort_by(&mut routes, key.comparator());
        let title = format!("\nSorted by {} using {}:", key.label(), algorithm.label());
        let options = self.options();
        write_routes(&mut self.out, &title, &routes, options.format, &options.palette)?;
        Ok(Flow::Continue)
    }

    fn search_flights(&mut self) -> Result<Flow> {
        writeln!(self.out, "\n--- SEARCH ---")?;
        writeln!(self.out, "1. By origin")?;
        writeln!(self.out, "2. By destination")?;
        writeln!(self.out, "3. By airline")?;
        writeln!(self.out, "4. By flight number")?;
        let Some(answer) = self.prompt("Your choice: ")? else {
            return Ok(Flow::Continue);
        };
        let (kind, question) = match answer.as_str() {
            "1" => (SearchKind::Origin, "Origin IATA code: "),
            "2" => (SearchKind::Destination, "Destination IATA code: "),
            "3" => (SearchKind::Airline, "Airline name: "),
            "4" => (SearchKind::Flight, "Flight number: "),
            _ => {
                self.error("Invalid choice.")?;
                return Ok(Flow::Continue);
            }
        };
        let Some(value) = self.prompt(question)? else {
            return Ok(Flow::Continue);
        };

        let result = search(&self.session.network, kind, &value);
        if !result.has_results() {
            self.error(&format!("No results for '{value}'."))?;
            return Ok(Flow::Continue);
        }
        let options = self.options();
        write_flights(
            &mut self.out,
            result.airport,
            &result.flights,
            options.format,
            &options.palette,
        )?;
        Ok(Flow::Continue)
    }

    fn save_routes(&mut self) -> Result<Flow> {
        writeln!(self.out, "\n--- SAVE ROUTES ---")?;
        if self.session.book.is_empty() {
            self.error("No routes to save.")?;
            return Ok(Flow::Continue);
        }
        match self.session.save() {
            Ok(path) => writeln!(
                self.out,
                "Saved {} route(s) to {}",
                self.session.book.len(),
                path.display()
            )?,
            Err(err) => self.error(&format!("Saving failed: {err:#}"))?,
        }
        Ok(Flow::Continue)
    }
}
