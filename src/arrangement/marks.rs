use super::Arrangement;
use crate::model::Holiday;

impl Arrangement {
    /// 元旦 (New Year's Day)
    pub fn new_year(&mut self) -> &mut Self {
        self.mark(Holiday::NewYearsDay)
    }

    /// 澳大利亚国庆日 (Australia Day)
    pub fn australia_day(&mut self) -> &mut Self {
        self.mark(Holiday::AustraliaDay)
    }

    /// 耶稣受难日 (Good Friday)
    pub fn good_friday(&mut self) -> &mut Self {
        self.mark(Holiday::GoodFriday)
    }

    /// 耶稣受难日翌日 (Easter Saturday)
    pub fn easter_saturday(&mut self) -> &mut Self {
        self.mark(Holiday::EasterSaturday)
    }

    /// 复活节星期日 (Easter Sunday)
    pub fn easter_sunday(&mut self) -> &mut Self {
        self.mark(Holiday::EasterSunday)
    }

    /// 复活节星期一 (Easter Monday)
    pub fn easter_monday(&mut self) -> &mut Self {
        self.mark(Holiday::EasterMonday)
    }

    /// 澳新军团日 (Anzac Day)
    pub fn anzac_day(&mut self) -> &mut Self {
        self.mark(Holiday::AnzacDay)
    }

    /// 国王诞辰日 (King's Birthday)
    pub fn kings_birthday(&mut self) -> &mut Self {
        self.mark(Holiday::KingsBirthday)
    }

    /// 劳动节 (Labour Day)
    pub fn labour_day(&mut self) -> &mut Self {
        self.mark(Holiday::LabourDay)
    }

    /// 圣诞节 (Christmas Day)
    pub fn christmas_day(&mut self) -> &mut Self {
        self.mark(Holiday::ChristmasDay)
    }

    /// 节礼日 (Boxing Day)
    pub fn boxing_day(&mut self) -> &mut Self {
        self.mark(Holiday::BoxingDay)
    }
}
