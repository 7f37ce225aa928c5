//! Localized user-facing text.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Display language.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum Locale {
    #[default]
    En,
    Zh,
}

/// Message catalog for one locale.
#[derive(Debug, Clone, Copy)]
pub struct Messages {
    pub title: &'static str,
    pub loading: &'static str,
    pub event_loading: &'static str,
    pub empty_orders: &'static str,
    pub empty_orders_hint: &'static str,
    pub col_event: &'static str,
    pub col_date: &'static str,
    pub col_tickets: &'static str,
    pub col_amount: &'static str,
    pub col_status: &'static str,
    pub col_action: &'static str,
    pub status_confirmed: &'static str,
    pub status_cancelled: &'static str,
    pub action_cancel: &'static str,
    pub action_delete: &'static str,
    pub detail_title: &'static str,
    pub detail_reference: &'static str,
    pub detail_event: &'static str,
    pub load_failed: &'static str,
    pub cancel_succeeded: &'static str,
    pub cancel_failed: &'static str,
    pub delete_succeeded: &'static str,
    pub delete_failed: &'static str,
    pub hint_select: &'static str,
    pub hint_details: &'static str,
    pub hint_refresh: &'static str,
    pub hint_back: &'static str,
    pub hint_help: &'static str,
    pub help_title: &'static str,
    pub help_navigation: &'static str,
    pub help_orders: &'static str,
    pub help_general: &'static str,
    pub help_move_down: &'static str,
    pub help_move_up: &'static str,
    pub help_top_bottom: &'static str,
    pub help_details: &'static str,
    pub help_back: &'static str,
    pub help_cancel: &'static str,
    pub help_delete: &'static str,
    pub help_refresh: &'static str,
    pub help_dismiss: &'static str,
    pub help_toggle: &'static str,
    pub help_quit: &'static str,
}

const EN: Messages = Messages {
    title: "My Event Orders",
    loading: "Loading...",
    event_loading: "Loading...",
    empty_orders: "You don't have any event orders yet.",
    empty_orders_hint: "Browse events and book one to see it here.",
    col_event: "Event",
    col_date: "Date",
    col_tickets: "Tickets",
    col_amount: "Price",
    col_status: "Status",
    col_action: "Action",
    status_confirmed: "Confirmed",
    status_cancelled: "Cancelled",
    action_cancel: "cancel",
    action_delete: "delete",
    detail_title: "Order Details",
    detail_reference: "Order #",
    detail_event: "event",
    load_failed: "Failed to load orders",
    cancel_succeeded: "Order cancelled",
    cancel_failed: "Failed to cancel order",
    delete_succeeded: "Order deleted",
    delete_failed: "Failed to delete order",
    hint_select: "select",
    hint_details: "details",
    hint_refresh: "refresh",
    hint_back: "back",
    hint_help: "help",
    help_title: "Help",
    help_navigation: "Navigation",
    help_orders: "Orders",
    help_general: "General",
    help_move_down: "Move down",
    help_move_up: "Move up",
    help_top_bottom: "Go to top / bottom",
    help_details: "Order details",
    help_back: "Back (leaves from the order list)",
    help_cancel: "Cancel a confirmed order",
    help_delete: "Delete a cancelled order",
    help_refresh: "Reload orders",
    help_dismiss: "Dismiss notification",
    help_toggle: "Toggle help",
    help_quit: "Quit",
};

const ZH: Messages = Messages {
    title: "我的活动订单",
    loading: "加载中...",
    event_loading: "加载中...",
    empty_orders: "您还没有任何活动订单。",
    empty_orders_hint: "立即报名活动 →",
    col_event: "活动名称",
    col_date: "日期",
    col_tickets: "票数",
    col_amount: "价格",
    col_status: "状态",
    col_action: "操作",
    status_confirmed: "已确认",
    status_cancelled: "已取消",
    action_cancel: "取消订单",
    action_delete: "删除",
    detail_title: "订单详情",
    detail_reference: "订单号",
    detail_event: "活动",
    load_failed: "获取订单失败",
    cancel_succeeded: "订单已成功取消",
    cancel_failed: "取消订单失败",
    delete_succeeded: "订单已成功删除",
    delete_failed: "删除订单失败",
    hint_select: "选择",
    hint_details: "详情",
    hint_refresh: "刷新",
    hint_back: "返回",
    hint_help: "帮助",
    help_title: "帮助",
    help_navigation: "导航",
    help_orders: "订单",
    help_general: "通用",
    help_move_down: "下移",
    help_move_up: "上移",
    help_top_bottom: "跳到顶部 / 底部",
    help_details: "订单详情",
    help_back: "返回（在订单列表中退出）",
    help_cancel: "取消已确认的订单",
    help_delete: "删除已取消的订单",
    help_refresh: "重新加载订单",
    help_dismiss: "关闭通知",
    help_toggle: "显示 / 隐藏帮助",
    help_quit: "退出",
};

impl Locale {
    /// The message catalog for this locale.
    pub fn messages(self) -> &'static Messages {
        match self {
            Self::En => &EN,
            Self::Zh => &ZH,
        }
    }

    /// Format a booking date the way the locale writes short dates.
    pub fn format_date(self, date: NaiveDate) -> String {
        match self {
            Self::En => date.format("%-m/%-d/%Y").to_string(),
            Self::Zh => date.format("%Y/%-m/%-d").to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_date() {
        let date = NaiveDate::from_ymd_opt(2024, 7, 5).unwrap();
        assert_eq!(Locale::En.format_date(date), "7/5/2024");
        assert_eq!(Locale::Zh.format_date(date), "2024/7/5");
    }

    #[test]
    fn test_locale_deserializes_lowercase() {
        let locale: Locale = serde_json::from_str("\"zh\"").unwrap();
        assert_eq!(locale, Locale::Zh);
        assert_eq!(locale.messages().load_failed, "获取订单失败");
    }

    #[test]
    fn test_zh_catalog_has_no_english_labels() {
        let (en, zh) = (Locale::En.messages(), Locale::Zh.messages());
        for (en, zh) in [
            (en.help_title, zh.help_title),
            (en.help_move_down, zh.help_move_down),
            (en.hint_back, zh.hint_back),
            (en.detail_reference, zh.detail_reference),
            (en.detail_event, zh.detail_event),
            (en.action_cancel, zh.action_cancel),
        ] {
            assert_ne!(en, zh);
        }
    }
}
