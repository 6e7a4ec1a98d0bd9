//! Prompt templates that steer the assistant through common Planfix
//! analyses. They do not call the API.

use chrono::{Duration, NaiveDate};
use rmcp::{
    ErrorData as McpError,
    handler::server::wrapper::Parameters,
    model::{PromptMessage, PromptMessageRole},
    prompt, prompt_router, schemars,
    schemars::JsonSchema,
};
use serde::{Deserialize, Serialize};

use super::PlanfixMcpServer;

pub const DEFAULT_SPRINT_DAYS: u32 = 14;

#[derive(Debug, Serialize, Deserialize, JsonSchema)]
pub struct AnalyzeProjectArgs {
    #[schemars(description = "Name of the project to analyze")]
    pub project_name: String,
}

#[derive(Debug, Serialize, Deserialize, JsonSchema)]
pub struct WeeklyReportArgs {
    #[schemars(description = "First day of the week, YYYY-MM-DD")]
    pub week_start: String,
}

#[derive(Debug, Default, Serialize, Deserialize, JsonSchema)]
pub struct PlanSprintArgs {
    #[schemars(description = "Sprint length in days (default 14)")]
    #[serde(default, deserialize_with = "crate::serde_utils::lenient_u32")]
    pub sprint_duration: Option<u32>,
}

pub(crate) fn project_status_text(project_name: &str) -> String {
    format!(
        r#"Analyze the current state of the project "{project_name}" in Planfix.

PROJECT ANALYSIS:
1. Check whether tasks are being completed on schedule
2. Assess the workload of the project team
3. Identify risks and bottlenecks
4. Determine the critical path of the project
5. Review the quality of completed work

METRICS:
- Share of tasks completed on time
- Average task completion time
- Number of overdue tasks
- Workload distribution across employees
- Budget adherence (if available)

PAY SPECIAL ATTENTION TO:
- Overdue tasks and their impact on the project
- Overloaded employees
- High-priority tasks
- Dependencies between tasks

RESULT:
Prepare a short report for management with:
- The current project status
- Problems found
- Recommendations for improvement
- A forecast for project completion"#
    )
}

/// Weekly report template for the seven days starting at `week_start`.
pub(crate) fn weekly_report_text(week_start: &str) -> Result<String, String> {
    let start = NaiveDate::parse_from_str(week_start.trim(), "%Y-%m-%d")
        .map_err(|_| format!("week_start must be a date in YYYY-MM-DD format (got '{week_start}')"))?;
    let end = start + Duration::days(6);

    Ok(format!(
        r#"Create a weekly report on the team's work for {start} - {end}.

KEY FIGURES:
- Tasks completed
- Tasks created
- Average task completion time
- Share of tasks completed on time
- Employee workload per project
- Total time spent

ACHIEVEMENTS:
- Main results of the week
- Completed projects or milestones
- Problems solved
- Expectations exceeded

PROBLEMS AND RISKS:
- Overdue tasks and their causes
- Overloaded employees
- Projects in trouble
- Technical difficulties
- Resource constraints

TRENDS:
- Comparison with the previous week
- Productivity dynamics
- Qualitative changes in the work

PLANS FOR NEXT WEEK:
- Priority tasks and projects
- Workload distribution
- Resources needed
- Expected results
- Preventive measures"#,
        start = start.format("%Y-%m-%d"),
        end = end.format("%Y-%m-%d"),
    ))
}

pub(crate) fn sprint_plan_text(days: u32) -> String {
    format!(
        r#"Plan a sprint lasting {days} days.

SPRINT GOALS:
1. Define the main goals and deliverables of the sprint
2. Set success criteria
3. Choose the key metrics to track

TASK PLANNING:
- Review the task backlog
- Estimate complexity and priority of each task
- Distribute tasks among team members
- Take availability and current workload into account
- Identify dependencies between tasks

SCHEDULE:
- Split the sprint into iterations if needed
- Plan the key milestones
- Leave buffer time for unplanned work
- Account for holidays and vacations

PROCESS:
- Schedule regular team syncs
- Define reporting procedures
- Set up automatic notifications
- Prepare status report templates

MONITORING:
- Define KPIs for tracking progress
- Set up dashboards and reports
- Plan checkpoints
- Prepare a corrective action plan

FINAL PLAN:
Produce a structured sprint plan with:
- Tasks with assignees and due dates
- A milestone schedule
- A communication and reporting plan
- Criteria for judging the sprint's success"#
    )
}

#[prompt_router(router = "prompt_router", vis = "pub(crate)")]
impl PlanfixMcpServer {
    #[prompt(
        name = "analyze_project_status",
        description = "Checklist for analyzing the state of a Planfix project"
    )]
    pub async fn analyze_project_status(
        &self,
        Parameters(args): Parameters<AnalyzeProjectArgs>,
    ) -> Result<Vec<PromptMessage>, McpError> {
        Ok(vec![PromptMessage::new_text(
            PromptMessageRole::User,
            project_status_text(args.project_name.trim()),
        )])
    }

    #[prompt(
        name = "create_weekly_report",
        description = "Outline for a weekly team report starting at week_start (YYYY-MM-DD)"
    )]
    pub async fn create_weekly_report(
        &self,
        Parameters(args): Parameters<WeeklyReportArgs>,
    ) -> Result<Vec<PromptMessage>, McpError> {
        let text =
            weekly_report_text(&args.week_start).map_err(|e| McpError::invalid_params(e, None))?;
        Ok(vec![PromptMessage::new_text(PromptMessageRole::User, text)])
    }

    #[prompt(
        name = "plan_sprint",
        description = "Sprint planning outline for a sprint of sprint_duration days (default 14)"
    )]
    pub async fn plan_sprint(
        &self,
        Parameters(args): Parameters<PlanSprintArgs>,
    ) -> Result<Vec<PromptMessage>, McpError> {
        let days = args.sprint_duration.unwrap_or(DEFAULT_SPRINT_DAYS);
        if days == 0 {
            return Err(McpError::invalid_params(
                "sprint_duration must be at least 1 day",
                None,
            ));
        }
        Ok(vec![PromptMessage::new_text(
            PromptMessageRole::User,
            sprint_plan_text(days),
        )])
    }
}

#[cfg(test)]
#[path = "prompts_test.rs"]
mod prompts_test;
