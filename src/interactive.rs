#![warn(missing_docs)]
#![warn(clippy::missing_docs_in_private_items)]

use std::io::{BufRead, Write};

use anyhow::{Context, Result};
use colored::Colorize;

use crate::{
    constants::HYPOTHETICAL_ASSIGNMENT,
    gradebook::{Category, Course, Grade, Student},
    report,
};

/// What the menu loop should do after an action.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Flow {
    /// Show the menu again.
    Continue,
    /// Leave the session.
    Exit,
}

/// A menu-driven grade manager session over any line-based input and output.
///
/// Invalid input is reported and asked for again; the session ends on menu
/// option 7 or when the input runs out. Output is plain text unless
/// [`Session::with_color`] turns highlighting on.
pub struct Session<R, W> {
    /// Where answers are read from
    input:                R,
    /// Where prompts and reports are written to
    output:               W,
    /// Credit hours used when the user leaves the answer blank
    default_credit_hours: f64,
    /// Whether warnings, confirmations and the menu title are highlighted
    color:                bool,
}

impl<R: BufRead, W: Write> Session<R, W> {
    /// Creates a session reading from `input` and writing to `output`.
    pub fn new(input: R, output: W) -> Self {
        Self {
            input,
            output,
            default_credit_hours: crate::config::default_credit_hours(),
            color:                false,
        }
    }

    /// Overrides the credit hours offered when the user leaves them blank.
    pub fn with_default_credit_hours(mut self, credit_hours: f64) -> Self {
        self.default_credit_hours = credit_hours;
        self
    }

    /// Highlights warnings and confirmations with ANSI colours. Only worth
    /// enabling when `output` is a terminal.
    pub fn with_color(mut self, color: bool) -> Self {
        self.color = color;
        self
    }

    /// Runs the session to completion and returns the student that was built,
    /// or `None` if no name was given.
    pub fn run(mut self) -> Result<Option<Student>> {
        self.say(&"=".repeat(60))?;
        self.say(&format!("{:^60}", "STUDENT GRADE MANAGER"))?;
        self.say(&"=".repeat(60))?;

        let Some(name) = self.ask("Enter your name: ")? else {
            return Ok(None);
        };
        if name.is_empty() {
            self.say("Name cannot be empty. Exiting.")?;
            return Ok(None);
        }

        let mut student = Student::new(name.as_str());
        self.say(&format!("\nWelcome, {name}!"))?;
        tracing::info!("Started session for {name}");

        loop {
            self.show_menu()?;
            let Some(choice) = self.ask("\nEnter your choice: ")? else {
                break;
            };

            let flow = match choice.as_str() {
                "1" => self.add_course(&mut student)?,
                "2" => self.add_grade(&mut student)?,
                "3" => self.view_grades(&student)?,
                "4" => self.view_gpa(&student)?,
                "5" => self.what_if(&student)?,
                "6" => self.remove_course(&mut student)?,
                "7" => {
                    self.say("\nThank you for using Student Grade Manager!")?;
                    Flow::Exit
                }
                _ => {
                    self.warn("\nInvalid choice. Please try again.")?;
                    Flow::Continue
                }
            };

            if flow == Flow::Exit {
                break;
            }
        }

        Ok(Some(student))
    }

    /// Writes one line of output.
    fn say(&mut self, line: &str) -> Result<()> {
        writeln!(self.output, "{line}").context("Failed to write to output")
    }

    /// Writes one line of output, highlighted as a problem.
    fn warn(&mut self, line: &str) -> Result<()> {
        if self.color {
            return self.say(&line.yellow().to_string());
        }
        self.say(line)
    }

    /// Writes one line of output, highlighted as a confirmation.
    fn success(&mut self, line: &str) -> Result<()> {
        if self.color {
            return self.say(&line.green().to_string());
        }
        self.say(line)
    }

    /// Prints a prompt and reads one trimmed answer. `None` once input is
    /// exhausted.
    fn ask(&mut self, prompt: &str) -> Result<Option<String>> {
        write!(self.output, "{prompt}").context("Failed to write prompt")?;
        self.output.flush().context("Failed to flush output")?;

        let mut line = String::new();
        let read = self
            .input
            .read_line(&mut line)
            .context("Failed to read input")?;
        if read == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim().to_string()))
    }

    /// Asks until the answer parses as a number accepted by `check`, which
    /// returns the complaint for a rejected value.
    fn ask_number(
        &mut self,
        prompt: &str,
        blank: Option<f64>,
        check: impl Fn(f64) -> Option<&'static str>,
    ) -> Result<Option<f64>> {
        loop {
            let Some(answer) = self.ask(prompt)? else {
                return Ok(None);
            };
            let parsed = match (answer.is_empty(), blank) {
                (true, Some(default)) => Ok(default),
                _ => answer.parse::<f64>(),
            };
            match parsed {
                Ok(value) if value.is_finite() => match check(value) {
                    Some(complaint) => self.warn(complaint)?,
                    None => return Ok(Some(value)),
                },
                _ => self.warn("Please enter a valid number.")?,
            }
        }
    }

    /// Asks for a 1-based index into `len` items until one is in range.
    fn ask_index(&mut self, prompt: &str, len: usize) -> Result<Option<usize>> {
        loop {
            let Some(answer) = self.ask(prompt)? else {
                return Ok(None);
            };
            match answer.parse::<usize>() {
                Ok(choice) if (1..=len).contains(&choice) => return Ok(Some(choice - 1)),
                Ok(_) => self.warn(&format!("Please enter a number between 1 and {len}."))?,
                Err(_) => self.warn("Please enter a valid number.")?,
            }
        }
    }

    /// Lists the student's courses and asks for one of them by number.
    fn pick_course(&mut self, student: &Student, with_standing: bool) -> Result<Option<String>> {
        let names: Vec<String> = student.course_names().map(str::to_string).collect();
        self.say("Available courses:")?;
        for (i, course) in student.courses().enumerate() {
            let line = if with_standing {
                format!(
                    "{}. {} (Current: {:.2}% - {})",
                    i + 1,
                    course.name(),
                    course.percentage(),
                    course.letter_grade()
                )
            } else {
                format!("{}. {}", i + 1, course.name())
            };
            self.say(&line)?;
        }

        let prompt = format!("Select course (1-{}): ", names.len());
        Ok(self
            .ask_index(&prompt, names.len())?
            .map(|i| names[i].clone()))
    }

    /// Asks for homework, exam or quiz.
    fn pick_category(&mut self) -> Result<Option<Category>> {
        self.say("\nGrade types:")?;
        for (i, category) in Category::ALL.iter().enumerate() {
            self.say(&format!("{}. {category}", i + 1))?;
        }
        Ok(self
            .ask_index("Select grade type (1-3): ", Category::ALL.len())?
            .and_then(|i| Category::from_menu_index(i + 1)))
    }

    /// Asks for points earned and points possible, re-asking until the pair
    /// makes a valid grade.
    fn ask_points(&mut self, earned_prompt: &str) -> Result<Option<(f64, f64)>> {
        let Some(score) = self.ask_number(earned_prompt, None, |v| {
            (v < 0.0).then_some("Points earned cannot be negative.")
        })?
        else {
            return Ok(None);
        };
        let Some(total) = self.ask_number("Enter total points possible: ", None, |v| {
            if v <= 0.0 {
                Some("Total points must be positive.")
            } else if score > v {
                Some("Points earned cannot exceed total points.")
            } else {
                None
            }
        })?
        else {
            return Ok(None);
        };
        Ok(Some((score, total)))
    }

    /// Prints the main menu.
    fn show_menu(&mut self) -> Result<()> {
        self.say(&format!("\n{}", "=".repeat(40)))?;
        if self.color {
            self.say(&"MAIN MENU".bold().to_string())?;
        } else {
            self.say("MAIN MENU")?;
        }
        self.say(&"=".repeat(40))?;
        for line in [
            "1. Add new course",
            "2. Add grade to existing course",
            "3. View grades and course details",
            "4. View GPA",
            "5. What-if grade calculator",
            "6. Remove course",
            "7. Exit",
        ] {
            self.say(line)?;
        }
        Ok(())
    }

    /// Menu option 1.
    fn add_course(&mut self, student: &mut Student) -> Result<Flow> {
        self.say("\n--- ADD NEW COURSE ---")?;
        let Some(name) = self.ask("Enter course name: ")? else {
            return Ok(Flow::Exit);
        };
        if name.is_empty() {
            self.warn("Course name cannot be empty.")?;
            return Ok(Flow::Continue);
        }
        if student.contains_course(&name) {
            self.warn(&format!("Course '{name}' already exists."))?;
            return Ok(Flow::Continue);
        }

        let default = self.default_credit_hours;
        let prompt = format!("Enter credit hours (default: {default:.1}): ");
        let Some(credit_hours) = self.ask_number(&prompt, Some(default), |v| {
            (v <= 0.0).then_some("Credit hours must be positive.")
        })?
        else {
            return Ok(Flow::Exit);
        };

        match Course::new(name.as_str(), credit_hours) {
            Ok(course) => {
                student.add_course(course);
                self.success(&format!("Course '{name}' added successfully!"))?;
            }
            Err(e) => self.warn(&format!("Error adding course: {e}"))?,
        }
        Ok(Flow::Continue)
    }

    /// Menu option 2.
    fn add_grade(&mut self, student: &mut Student) -> Result<Flow> {
        if student.is_empty() {
            self.warn("\nNo courses available. Please add a course first.")?;
            return Ok(Flow::Continue);
        }

        self.say("\n--- ADD GRADE ---")?;
        let Some(course_name) = self.pick_course(student, false)? else {
            return Ok(Flow::Exit);
        };
        let Some(assignment) = self.ask("Enter assignment name: ")? else {
            return Ok(Flow::Exit);
        };
        if assignment.is_empty() {
            self.warn("Assignment name cannot be empty.")?;
            return Ok(Flow::Continue);
        }
        let Some(category) = self.pick_category()? else {
            return Ok(Flow::Exit);
        };
        let Some((score, total)) = self.ask_points("Enter points earned: ")? else {
            return Ok(Flow::Exit);
        };

        match Grade::new(assignment, score, total, category) {
            Ok(grade) => {
                let line = grade.to_string();
                if let Some(course) = student.course_mut(&course_name) {
                    course.add_grade(grade);
                }
                self.success("\nGrade added successfully!")?;
                self.say(&line)?;
            }
            Err(e) => self.warn(&format!("Error adding grade: {e}"))?,
        }
        Ok(Flow::Continue)
    }

    /// Menu option 3.
    fn view_grades(&mut self, student: &Student) -> Result<Flow> {
        if student.is_empty() {
            self.warn("\nNo courses available.")?;
            return Ok(Flow::Continue);
        }
        self.say(&format!("\n{}", "=".repeat(60)))?;
        self.say("GRADE REPORT")?;
        self.say(&"=".repeat(60))?;
        self.say(&report::student_report(student))?;
        Ok(Flow::Continue)
    }

    /// Menu option 4.
    fn view_gpa(&mut self, student: &Student) -> Result<Flow> {
        self.say("\n--- GPA SUMMARY ---")?;
        self.say(&format!("Student: {}", student.name()))?;
        self.say(&format!("Current GPA: {:.2}", student.calculate_gpa()))?;
        if !student.is_empty() {
            self.say("")?;
            self.say(&report::gpa_summary(student))?;
        }
        Ok(Flow::Continue)
    }

    /// Menu option 5.
    fn what_if(&mut self, student: &Student) -> Result<Flow> {
        if student.is_empty() {
            self.warn("\nNo courses available. Please add a course first.")?;
            return Ok(Flow::Continue);
        }

        self.say("\n--- WHAT-IF GRADE CALCULATOR ---")?;
        self.say("Calculate how a hypothetical grade would affect your course grade or GPA.\n")?;
        let Some(course_name) = self.pick_course(student, true)? else {
            return Ok(Flow::Exit);
        };
        let Some(assignment) = self.ask("Enter hypothetical assignment name: ")? else {
            return Ok(Flow::Exit);
        };
        let assignment = if assignment.is_empty() {
            HYPOTHETICAL_ASSIGNMENT.to_string()
        } else {
            assignment
        };
        let Some(category) = self.pick_category()? else {
            return Ok(Flow::Exit);
        };
        let Some((score, total)) = self.ask_points("Enter hypothetical points earned: ")? else {
            return Ok(Flow::Exit);
        };

        match Grade::new(assignment, score, total, category) {
            Ok(grade) => {
                if let Some(summary) = report::what_if_summary(student, &course_name, &grade) {
                    self.say("\n--- WHAT-IF RESULTS ---")?;
                    self.say(&summary)?;
                }
            }
            Err(e) => self.warn(&format!("Error in calculation: {e}"))?,
        }
        Ok(Flow::Continue)
    }

    /// Menu option 6.
    fn remove_course(&mut self, student: &mut Student) -> Result<Flow> {
        if student.is_empty() {
            self.warn("\nNo courses available.")?;
            return Ok(Flow::Continue);
        }

        self.say("\n--- REMOVE COURSE ---")?;
        let Some(course_name) = self.pick_course(student, false)? else {
            return Ok(Flow::Exit);
        };
        let prompt = format!("Are you sure you want to remove '{course_name}'? (y/N): ");
        let Some(confirm) = self.ask(&prompt)? else {
            return Ok(Flow::Exit);
        };

        if matches!(confirm.to_ascii_lowercase().as_str(), "y" | "yes") {
            student.remove_course(&course_name);
            self.success(&format!("Course '{course_name}' removed successfully!"))?;
        } else {
            self.say("Course removal cancelled.")?;
        }
        Ok(Flow::Continue)
    }
}
