//! 命令行辅助工具

#[macro_export]
macro_rules! flush {
    () => {{
        use std::io::{Write, stdout};

        stdout().flush().unwrap()
    }};
}

/// 读取当前行
#[macro_export]
macro_rules! readln {
    () => {
        std::io::stdin()
            .lines()
            .next()
            .expect("输入已结束")
            .unwrap()
    };

    ($($arg:tt)+) => {{
        print!($($arg)+);
        print!(": ");
        flush! {};
        readln! {}
    }};
}

/// 等待
#[macro_export]
macro_rules! pause {
    () => {{
        let _ = readln! {"press any key to continue...\n"};
    }};
}
