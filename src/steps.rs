use crate::commands::print_success;
use anyhow::Result;
use std::fmt;

#[cfg(test)]
use mockall::automock;

/// A single composed git invocation.
///
/// Steps are built once per subcommand invocation, in the order they must
/// run, and never mutated after composition. Composition itself executes
/// nothing; only a [`StepRunner`] does.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GitStep {
    args: Vec<String>,
    label: Option<String>,
}

impl GitStep {
    pub fn new<I, S>(args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            args: args.into_iter().map(Into::into).collect(),
            label: None,
        }
    }

    /// Success message printed after this step completes.
    pub fn labeled(mut self, label: &str) -> Self {
        self.label = Some(label.to_string());
        self
    }

    pub fn args(&self) -> &[String] {
        &self.args
    }

    pub fn label(&self) -> Option<&str> {
        self.label.as_deref()
    }
}

impl fmt::Display for GitStep {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "git")?;
        for arg in &self.args {
            if arg.contains(char::is_whitespace) {
                write!(f, " \"{}\"", arg)?;
            } else {
                write!(f, " {}", arg)?;
            }
        }
        Ok(())
    }
}

/// Executes a composed [`GitStep`] as a subprocess.
///
/// Abstracted behind a trait so the stop-on-first-failure behavior of
/// [`run_steps`] can be exercised without a real repository.
#[cfg_attr(test, automock)]
pub trait StepRunner {
    fn run_step(&self, step: &GitStep) -> Result<()>;
}

/// Run each step in order, reporting success per step and stopping at the
/// first failure.
///
/// No rollback is attempted: partial completion is left visible through
/// git's own state, which is the recovery surface for the operator.
pub fn run_steps(runner: &impl StepRunner, steps: &[GitStep]) -> Result<()> {
    for step in steps {
        runner
            .run_step(step)
            .map_err(|e| anyhow::anyhow!("Step `{}` failed: {:#}", step, e))?;
        if let Some(label) = step.label() {
            print_success(label);
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use mockall::predicate::eq;

    #[test]
    fn test_step_display_plain_args() {
        let step = GitStep::new(["reset", "--soft", "abc123^"]);
        assert_eq!(step.to_string(), "git reset --soft abc123^");
    }

    #[test]
    fn test_step_display_quotes_args_with_spaces() {
        let step = GitStep::new(["commit", "--edit", "-m", "fix the thing", "--no-verify"]);
        assert_eq!(
            step.to_string(),
            "git commit --edit -m \"fix the thing\" --no-verify"
        );
    }

    #[test]
    fn test_label_does_not_change_rendering() {
        let step = GitStep::new(["fetch"]).labeled("Fetched");
        assert_eq!(step.to_string(), "git fetch");
        assert_eq!(step.label(), Some("Fetched"));
    }

    #[test]
    fn test_run_steps_runs_all_in_order() {
        let first = GitStep::new(["fetch"]);
        let second = GitStep::new(["rebase", "origin/main"]);

        let mut runner = MockStepRunner::new();
        let mut seq = mockall::Sequence::new();
        runner
            .expect_run_step()
            .with(eq(first.clone()))
            .times(1)
            .in_sequence(&mut seq)
            .returning(|_| Ok(()));
        runner
            .expect_run_step()
            .with(eq(second.clone()))
            .times(1)
            .in_sequence(&mut seq)
            .returning(|_| Ok(()));

        assert!(run_steps(&runner, &[first, second]).is_ok());
    }

    #[test]
    fn test_run_steps_stops_on_first_failure() {
        let first = GitStep::new(["reset", "--soft", "abc123^"]);
        let second = GitStep::new(["commit", "--edit", "-m", "fix", "--no-verify"]);

        let mut runner = MockStepRunner::new();
        runner
            .expect_run_step()
            .with(eq(first.clone()))
            .times(1)
            .returning(|_| Err(anyhow::anyhow!("exit status 128")));
        // The second step must never be attempted.
        runner
            .expect_run_step()
            .with(eq(second.clone()))
            .times(0);

        let err = run_steps(&runner, &[first, second]).unwrap_err();
        assert!(err.to_string().contains("git reset --soft abc123^"));
    }

    #[test]
    fn test_run_steps_empty_sequence_is_ok() {
        let runner = MockStepRunner::new();
        assert!(run_steps(&runner, &[]).is_ok());
    }
}
