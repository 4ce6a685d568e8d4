//! etvi 命令行终端

mod utils;

use std::{fs, path::Path};

use anyhow::Context;
use etvi::{models::ReportData, services::Reporter, utils::create_and_write};

const GIT_REPOSITORY: &str = "https://github.com/fltLi/etvi";

/// 单次工作
fn run() {
    println!();

    let template = readln! {"template"};
    let data = readln! {"data"};
    let outfile = readln! {"outfile"};

    println!("imputing...");
    flush! {};

    match impute(&template, &data, &outfile) {
        Ok(len) => println!("imputation completed, {len} bytes written to {outfile}."),
        Err(e) => println!("imputation failed, error:\n{e:#}"),
    }

    pause! {};
}

/// 读取模板与数据, 渲染并写出
fn impute(template: &str, data: &str, outfile: &str) -> anyhow::Result<usize> {
    let template = fs::read_to_string(template).context("read template")?;
    let data = fs::read_to_string(data).context("read data")?;

    let reporter = Reporter::new(&template).context("parse template")?;
    let data: ReportData = data.parse().context("parse data")?;

    let body = reporter.render(data)?;
    create_and_write(&body, Path::new(outfile)).context("write outfile")?;

    Ok(body.len())
}

fn main() {
    println!("etvi-cli\n{GIT_REPOSITORY}");
    flush! {};

    loop {
        run();
    }
}
