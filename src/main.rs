//! quiz-grader - 주관식 퀴즈 답안 채점 CLI

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use quiz_grading::config::{load_config, GraderConfig};
use quiz_grading::scoring::{grade_submission, AnswerKey, ScoreError, Submission};
use quiz_grading::{evaluate_answer, is_answer_accepted};
use serde::Serialize;

#[derive(Parser, Debug)]
#[command(name = "quiz-grader", version)]
#[command(about = "허용 오차를 반영한 주관식 퀴즈 채점 도구")]
struct Cli {
    /// 설정 파일 경로 (JSON)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// 답 하나를 정답 컬럼과 비교
    Check {
        /// 사용자가 입력한 답
        user_answer: String,
        /// 정답 컬럼 (`/`로 복수 정답 구분)
        answer_field: String,
        /// 판정 근거를 JSON으로 출력
        #[arg(long)]
        explain: bool,
    },
    /// 제출 파일을 정답표로 채점
    Grade {
        /// 퀴즈 정답표 JSON 경로
        #[arg(short, long)]
        key: PathBuf,
        /// 사용자 제출 JSON 경로
        #[arg(short, long)]
        submission: PathBuf,
    },
}

fn to_json<T: Serialize>(value: &T, config: &GraderConfig) -> Result<String, ScoreError> {
    let json = if config.pretty_output {
        serde_json::to_string_pretty(value)?
    } else {
        serde_json::to_string(value)?
    };
    Ok(json)
}

fn run(command: Command, config: &GraderConfig) -> Result<(), ScoreError> {
    match command {
        Command::Check {
            user_answer,
            answer_field,
            explain,
        } => {
            if explain {
                let evaluation = evaluate_answer(&user_answer, &answer_field);
                println!("{}", to_json(&evaluation, config)?);
            } else if is_answer_accepted(&user_answer, &answer_field) {
                println!("정답");
            } else {
                println!("오답");
            }
        }
        Command::Grade { key, submission } => {
            let answer_key = AnswerKey::load(&key)?;
            log::info!("정답표 로드: {} 문항 ({})", answer_key.len(), key.display());

            let submission = Submission::load(&submission)?;
            let report = grade_submission(&answer_key, &submission, config)?;
            println!("{}", to_json(&report, config)?);
        }
    }
    Ok(())
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    let config = load_config(cli.config.as_deref());

    // 로깅 초기화 (RUST_LOG 미설정 시 설정 파일의 레벨)
    env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or(config.log_level.as_str()),
    )
    .init();

    match run(cli.command, &config) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("오류: {}", e);
            ExitCode::FAILURE
        }
    }
}
